// Copyright 2026 the Tabstrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A five-tab bar: layout, separators, and an animated focus sweep.
//!
//! This example shows how to combine:
//! - `tabstrip_layout` for frames, spacing, and content modes,
//! - `tabstrip_sequence` for the button/separator arrangement,
//! - `tabstrip_focus` for the indicator rectangle at fractional positions.
//!
//! Run:
//! - `cargo run -p tabstrip_demos --example horizontal_bar`

use kurbo::Rect;
use tabstrip_focus::{local_index_range, local_progress};
use tabstrip_layout::{
    ButtonSpec, ContentMode, HorizontalLayout, MINIMUM_RECOMMENDED_BUTTON_WIDTH,
};
use tabstrip_sequence::Element;

fn print_frames(label: &str, layout: &mut HorizontalLayout<&'static str>) {
    println!("\n== {label} ==");
    let elements: Vec<Element<&str>> = layout.sequence().elements().to_vec();
    for (element, frame) in elements.iter().zip(layout.frames()) {
        match element {
            Element::Button(id) => {
                println!("  button {id:<8} x={:>6.1} width={:>6.1}", frame.x0, frame.width());
            }
            Element::Separator(id) => {
                println!("  sep #{:<7} x={:>6.1} width={:>6.1}", id.raw(), frame.x0, frame.width());
            }
        }
    }
}

fn main() {
    let tabs = ["home", "search", "library", "history", "settings"];
    let container = Rect::new(0.0, 0.0, 480.0, 44.0);

    let mut layout: HorizontalLayout<&str> = HorizontalLayout::new();
    layout.layout_in(container);
    let specs: Vec<ButtonSpec<&str>> = tabs
        .iter()
        .map(|&tab| ButtonSpec::new(tab, 30.0 + 8.0 * tab.len() as f64))
        .collect();
    layout
        .insert(&specs, 0)
        .expect("fresh layout accepts the initial batch");

    print_frames("intrinsic widths", &mut layout);

    // Thin separators between tabs; the flag change raises a reload signal.
    if layout.set_show_separators(true) {
        layout.reload();
    }
    print_frames("with separators", &mut layout);

    // Equal-width tabs across the container.
    layout.set_content_mode(ContentMode::Fit);
    print_frames("fit mode", &mut layout);
    let width = layout
        .frame_of("home")
        .map_or(0.0, |frame| frame.width());
    if width < MINIMUM_RECOMMENDED_BUTTON_WIDTH {
        println!("  (warning: {width:.1} is below the recommended tap width)");
    }

    // Sweep the focus indicator from tab 1 to tab 2, as a pager would while
    // the user drags between pages.
    println!("\n== focus sweep 1.0 -> 2.0 ==");
    for step in 0..=4 {
        let position = 1.0 + f64::from(step) / 4.0;
        let range = local_index_range(position, 0, tabs.len() - 1);
        let area = layout.focus_area(position, tabs.len());
        println!(
            "  position {position:>4.2}  between {}..{} at {:>4.2}  x={:>6.1} width={:>6.1} height={:>4.1}",
            range.lower,
            range.upper,
            local_progress(position),
            area.x0,
            area.width(),
            area.height()
        );
    }

    // Dropping a tab keeps the arrangement and the focus math consistent.
    layout.remove(&["library"]);
    print_frames("after removing 'library'", &mut layout);
}
