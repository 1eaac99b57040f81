// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo: a roster of names kept in a Strand
//
// Walks through the full container API:
// - with_capacity: explicit initial capacity
// - insert/append: writes that grow the store transparently
// - read: borrow an element by index
// - remove: drop the first occurrence of a value
// - Display: the [a,b,c] console rendering

use strand::Strand;

fn main() -> Result<(), strand::StrandError> {
    let mut roster = Strand::with_capacity(8)?;

    roster.insert("ada", 0)?;
    roster.append("grace");
    roster.append("edsger");
    println!("{roster}");

    println!("Second entry is: {}", roster.read(1)?);

    roster.insert("barbara", 0)?;
    roster.insert("donald", 1)?;
    println!("{roster}");

    roster.remove("donald")?;
    println!("{roster}");

    println!(
        "{} entries, capacity {}",
        roster.len(),
        roster.capacity()
    );

    Ok(())
}
