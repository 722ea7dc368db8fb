//! Tests for author controller endpoints.


use super::*;
