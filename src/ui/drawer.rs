// SPDX-License-Identifier: MPL-2.0
//! Settings drawer shown to the left of the content.
//!
//! Holds the rotation interval picker, the theme chips and a collapsible
//! usage section. The drawer keeps its own neutral colors whatever theme is
//! active so the chips stay comparable.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::feedback::{FlashState, FlashTarget};
use crate::ui::styles;
use crate::ui::theme::ThemeName;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Font, Length};

pub const MIN_INTERVAL_CHOICE: u32 = 5;
pub const MAX_INTERVAL_CHOICE: u32 = 60;
pub const INTERVAL_CHOICE_STEP: u32 = 5;

/// Lines of the usage section.
pub const HELP_LINES: [&str; 6] = [
    "• 상단 바 드래그: 창 이동",
    "• ⏸/▶: 일시정지/재생",
    "• ⚙: 설정 열기/닫기",
    "• 용어 클릭: 구글 검색",
    "• Ctrl+휠: 글자 크기",
    "• ⇲: 창 크기 조절",
];

/// Intervals offered by the picker, in seconds.
#[must_use]
pub fn interval_choices() -> Vec<u32> {
    (MIN_INTERVAL_CHOICE..=MAX_INTERVAL_CHOICE)
        .step_by(INTERVAL_CHOICE_STEP as usize)
        .collect()
}

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub interval_secs: u32,
    pub theme: ThemeName,
    pub help_open: bool,
    pub flash: &'a FlashState,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    IntervalSelected(u32),
    ThemeSelected(ThemeName),
    ToggleHelp,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bold = Font {
        weight: Weight::Bold,
        ..Font::default()
    };

    let title = Text::new("설정")
        .size(typography::TITLE)
        .font(bold)
        .color(palette::DRAWER_TITLE);

    let interval = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new("전환 시간")
                .size(typography::LABEL)
                .font(bold)
                .color(palette::DRAWER_LABEL),
        )
        .push(
            pick_list(
                interval_choices(),
                Some(ctx.interval_secs),
                Message::IntervalSelected,
            )
            .text_size(typography::LABEL),
        )
        .push(
            Text::new("초")
                .size(typography::LABEL)
                .color(palette::DRAWER_LABEL),
        );

    let chips = ThemeName::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, theme| {
            row.push(
                button(Space::new())
                    .width(sizing::THEME_CHIP)
                    .height(sizing::THEME_CHIP)
                    .on_press(Message::ThemeSelected(theme))
                    .style(styles::button::chip(
                        ctx.flash
                            .color_for(FlashTarget::ThemeChip(theme), theme.palette().background),
                        theme == ctx.theme,
                    )),
            )
        });

    let themes = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new("테마 색상")
                .size(typography::LABEL)
                .font(bold)
                .color(palette::DRAWER_LABEL),
        )
        .push(chips);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .width(Length::Fill)
        .push(title)
        .push(interval)
        .push(themes)
        .push(help_section(&ctx, bold));

    container(content)
        .width(sizing::DRAWER_WIDTH)
        .height(Length::Fill)
        .style(styles::container::panel(
            palette::DRAWER_SURFACE,
            palette::DRAWER_TITLE,
        ))
        .into()
}

fn help_section<'a>(ctx: &ViewContext<'a>, bold: Font) -> Element<'a, Message> {
    let arrow = if ctx.help_open { "▼" } else { "▶" };
    let toggle_background = ctx
        .flash
        .color_for(FlashTarget::HelpToggle, palette::DRAWER_SURFACE);

    let toggle = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new("사용법").size(typography::LABEL).font(bold))
            .push(Text::new(arrow).size(typography::CAPTION)),
    )
    .padding(0)
    .on_press(Message::ToggleHelp)
    .style(styles::button::flat(
        toggle_background,
        palette::DRAWER_LABEL,
    ));

    let mut section = Column::new().spacing(spacing::XXS).push(toggle);
    if ctx.help_open {
        section = HELP_LINES.iter().fold(section, |section, line| {
            section.push(
                Text::new(*line)
                    .size(typography::CAPTION)
                    .color(palette::DRAWER_MUTED),
            )
        });
    }
    section.into()
}
