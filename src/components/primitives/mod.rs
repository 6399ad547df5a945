//! Primitive Components
//!
//! Basic form building blocks: buttons, inputs, choice controls.

pub mod button;
pub mod checkbox;
pub mod combo_box;
pub mod radio_group;
pub mod text_input;
