/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().to_string()
}

pub fn validate_username(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Username cannot be empty".to_string());
    }

    if s.len() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username cannot exceed {} characters",
            MAX_USERNAME_LENGTH
        ));
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_') {
        return Err(
            "Username can only contain letters, numbers, dashes and underscores".to_string(),
        );
    }

    if s.starts_with(['-', '_']) {
        return Err("Username must start with a letter or number".to_string());
    }

    Ok(())
}

pub fn validate_title(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }

    if s.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!("Title cannot exceed {} characters", MAX_TITLE_LENGTH));
    }

    Ok(())
}

/// Hides everything but the first character of the local part, e.g.
/// `jane@example.com` becomes `j***@example.com`.
pub fn mask_email(email: &str) -> Option<String> {
    let (local, domain) = email.rsplit_once('@')?;
    let first = local.chars().next()?;

    if domain.is_empty() {
        return None;
    }

    Some(format!("{}***@{}", first, domain))
}
