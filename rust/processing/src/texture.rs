// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Texture loading seam
//!
//! The floor texture is an opaque external resource fetched by URL. The
//! pipeline never retries and never falls back: a failed fetch surfaces as
//! an absent floor plus a diagnostic. Implementations live outside this
//! workspace (HTTP clients, asset caches, test stubs).

use futures_core::future::LocalBoxFuture;
use thiserror::Error;

/// A resolved texture resource
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub url: String,
}

impl Texture {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Texture resolution failure, reported by the loader implementation
#[derive(Error, Debug, Clone)]
pub enum TextureError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}

/// External resource loader for floor textures
///
/// Futures are `LocalBoxFuture`: the scene model is single-threaded and the
/// completion path appends through a non-`Send` shared group handle.
pub trait TextureLoader {
    fn load<'a>(&'a self, url: &'a str)
        -> LocalBoxFuture<'a, std::result::Result<Texture, TextureError>>;
}
