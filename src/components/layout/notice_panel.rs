//! Notice Panel Component
//!
//! The details output pane: shows submit results at the bottom of the
//! details region.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::notice_state::Notice;
use crate::theme::colors::DeskColors;
use crate::utils::format::format_time;

/// Notice panel component
pub struct NoticePanel {
    entities: AppEntities,
    expanded: bool,
}

impl NoticePanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe notice changes
        cx.observe(&entities.notices, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_notice(&self, notice: &Notice) -> impl IntoElement {
        let time = format_time(&notice.timestamp);

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(DeskColors::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(70.0))
                    .child(time),
            )
            .child(
                div()
                    .text_color(notice.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(notice.level.label()),
            )
            .child(
                div()
                    .text_color(DeskColors::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(notice.message.clone()),
            )
    }
}

impl Render for NoticePanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notices = self.entities.notices.read(cx);
        let count = notices.len();

        let height = if self.expanded { px(150.0) } else { px(32.0) };

        let entities = self.entities.clone();

        let mut panel = div()
            .h(height)
            .w_full()
            .bg(DeskColors::notice_panel_bg())
            .flex()
            .flex_col()
            // Header row
            .child(
                div()
                    .h(px(32.0))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(gpui::rgba(0xffffff22))
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(DeskColors::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child("Output"),
                            )
                            .child(
                                div()
                                    .text_color(DeskColors::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .id("clear-notices")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(DeskColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.notices.update(cx, |notices, cx| {
                                            notices.clear();
                                            cx.notify();
                                        });
                                    })
                                    .child("Clear"),
                            )
                            .child(
                                div()
                                    .id("toggle-notices")
                                    .px_2()
                                    .py_1()
                                    .rounded_sm()
                                    .text_color(DeskColors::text_muted())
                                    .text_size(px(11.0))
                                    .cursor_pointer()
                                    .hover(|s| s.bg(gpui::rgba(0xffffff22)))
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            this.toggle_expanded(cx);
                                        },
                                    ))
                                    .child(if self.expanded { "▼" } else { "▲" }),
                            ),
                    ),
            );

        // Notice entries (only when expanded), newest first
        if self.expanded {
            let entries: Vec<Notice> = notices.entries().iter().rev().take(50).cloned().collect();

            panel = panel.child(
                div()
                    .id("notice-entries")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_4()
                    .py_1()
                    .children(entries.iter().map(|notice| self.render_notice(notice))),
            );
        }

        panel
    }
}
