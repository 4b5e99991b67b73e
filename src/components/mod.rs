// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Form components structured for MVU-style updates.

pub mod field;
pub mod login;
pub mod password_field;
pub mod wizard;
