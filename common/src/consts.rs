/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const TOKEN_TYPE: &str = "bearer";

pub const DEFAULT_PAGE_LIMIT: u64 = 100;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_TITLE_LENGTH: usize = 200;

pub const BASE_JOB_TITLES: [&str; 6] = [
    "Software Engineer",
    "Product Manager",
    "Designer",
    "Data Scientist",
    "Technical Writer",
    "Community Manager",
];
