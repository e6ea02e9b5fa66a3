// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! String helpers: substitution, whitespace, list coercion and value parsing.

pub mod boolval;
pub mod humansz;
pub mod strtr;
pub mod whitespace;

pub use boolval::boolval;
pub use humansz::humansz;
pub use strtr::strtr;
pub use whitespace::{force_list, ws_norm, OneOrMany, Separator};
