//! RadioGroup Component
//!
//! A mutually-exclusive choice group. Exactly one option is selected at
//! all times; activating another option replaces the previous selection.

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::DeskColors;

/// A radio group option
#[derive(Debug, Clone)]
pub struct RadioOption {
    pub value: SharedString,
    pub label: SharedString,
}

impl RadioOption {
    pub fn new(value: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A vertical radio group
#[derive(IntoElement)]
pub struct RadioGroup {
    id: ElementId,
    options: Vec<RadioOption>,
    selected: SharedString,
    on_change: Option<Box<dyn Fn(&SharedString, &mut Window, &mut App) + 'static>>,
}

impl RadioGroup {
    /// Create a new radio group with the given selected value
    pub fn new(id: impl Into<ElementId>, selected: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            options: Vec::new(),
            selected: selected.into(),
            on_change: None,
        }
    }

    /// Set the options
    pub fn options(mut self, options: Vec<RadioOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the change handler, called with the activated option's value
    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for RadioGroup {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let selected = self.selected.clone();
        let on_change = self.on_change.map(std::rc::Rc::new);

        div()
            .id(self.id)
            .flex()
            .flex_col()
            .gap_1()
            .children(self.options.into_iter().map(|option| {
                let is_selected = option.value == selected;
                let value = option.value.clone();
                let on_change = on_change.clone();

                let (dot_border, dot_fill) = if is_selected {
                    (DeskColors::brand(), DeskColors::brand())
                } else {
                    (DeskColors::input_border(), DeskColors::input_bg())
                };

                let mut row = div()
                    .id(SharedString::from(format!("radio-{}", option.value)))
                    .flex()
                    .items_center()
                    .gap_2()
                    .py_1()
                    .cursor_pointer()
                    // Outer ring with inner dot
                    .child(
                        div()
                            .size(px(16.0))
                            .rounded_full()
                            .border_1()
                            .border_color(dot_border)
                            .bg(DeskColors::input_bg())
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(
                                div()
                                    .size(px(8.0))
                                    .rounded_full()
                                    .bg(if is_selected {
                                        dot_fill
                                    } else {
                                        DeskColors::input_bg()
                                    }),
                            ),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(DeskColors::text_primary())
                            .child(option.label),
                    );

                if let Some(handler) = on_change {
                    row = row.on_click(move |_event, window, cx| {
                        handler(&value, window, cx);
                    });
                }

                row
            }))
    }
}
