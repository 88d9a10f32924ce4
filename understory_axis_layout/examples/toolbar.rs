// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a toolbar row at a few widths and prints where each item lands.
//!
//! Run:
//! - `cargo run -p understory_axis_layout --example toolbar`

use kurbo::Size;
use understory_axis_layout::{SizedChildren, StackConfig, arrange, measure};

fn main() {
    let labels = ["back", "title", "search", "menu"];
    let mut children = SizedChildren::from_sizes([
        Size::new(32.0, 32.0),
        Size::new(240.0, 20.0),
        Size::new(32.0, 32.0),
        Size::new(32.0, 32.0),
    ]);
    let handles = children.handles();
    // The title gives up space before anything else.
    let config = StackConfig::horizontal().with_shrink_index(1);

    for width in [400.0, 260.0, 120.0, 60.0] {
        let available = Size::new(width, 48.0);
        let desired = measure(&mut children, &handles, available, &config);
        let occupied = arrange(&mut children, &handles, available, &config);
        println!("width {width}: desired {desired:?}, occupied {occupied:?}");
        for (label, rect) in labels.iter().zip(children.placements()) {
            println!(
                "  {label:>6}: x {:>6.1}..{:<6.1} h {:.1}",
                rect.x0,
                rect.x1,
                rect.height()
            );
        }
    }
}
