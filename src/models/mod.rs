// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure validation and formatting helpers shared by all form components.

pub mod email;
pub mod field;
pub mod password;
pub mod phone;
pub mod schema;
