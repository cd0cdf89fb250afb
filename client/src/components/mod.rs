//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and the route guard while reading shared
//! state from Leptos context providers.

pub mod nav_bar;
pub mod protected;
pub mod role_picker;
pub mod toast_stack;
