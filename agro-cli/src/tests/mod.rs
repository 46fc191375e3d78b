//! Unit tests for the agro CLI.

use super::*;

mod unit;
