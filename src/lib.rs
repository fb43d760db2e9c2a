// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod card;
pub mod config;
pub mod select;
pub mod story;
pub mod text;
pub mod timefmt;
