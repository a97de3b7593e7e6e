//! Core library for patwatch
//!
//! This crate implements the **Functional Core** of the patwatch release
//! automation tools, following the Functional Core - Imperative Shell pattern.
//!
//! # Architecture Overview
//!
//! - **`patwatch_core`** (this crate): Pure transformation functions with zero I/O
//! - **`patwatch`**: HTTP requests, file writes and orchestration (the Imperative Shell)
//!
//! Functions here take bytes or strings that the shell already fetched and
//! return structured records or typed errors. Nothing in this crate touches the
//! network, the filesystem or the clock, which keeps the tests fixture-only.
//!
//! # Module Organization
//!
//! - [`release`]: GitHub release listings and tag normalization
//! - [`forms`]: Winlink Standard Forms page scraping and archive naming
//! - [`archive`]: In-memory zip validation and version extraction
//! - [`keepalive`]: Monthly keep-alive token for scheduled workflows
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use patwatch_core::archive::validate_archive;
//! use patwatch_core::forms::{archive_filename, archive_url, PAT_FORMS_API_BASE};
//!
//! let report = validate_archive(&bytes)?;
//! let filename = archive_filename(&report.version);
//! let url = archive_url(PAT_FORMS_API_BASE, &filename);
//! ```

pub mod archive;
pub mod forms;
pub mod keepalive;
pub mod release;
