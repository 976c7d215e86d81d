//! Composable OAuth 2.0 user-info resolvers: chain identity loaders over authorized clients with
//! first-match delegation and transport-agnostic contracts.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod obs;
pub mod resolver;
pub mod user;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, BTreeSet},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{AuthenticationError, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, parking_lot as _};
