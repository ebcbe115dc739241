//! Integration tests for Iron Haven.
//!
//! # Running Tests
//!
//! These tests exercise a running API server against a real database, so
//! they are `#[ignore]`d by default:
//!
//! ```bash
//! # Start PostgreSQL, then:
//! cargo run -p iron-haven-cli -- migrate
//! cargo run -p iron-haven-cli -- seed
//! cargo run -p iron-haven-api &
//!
//! # Run the ignored tests
//! cargo test -p iron-haven-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` - Server under test (default: `http://localhost:3000`)
//! - `DATABASE_URL` - Direct database access for fixtures and assertions
//!
//! # Test Categories
//!
//! - `catalog` - Catalog read endpoints
//! - `booking_flow` - Booking writes, capacity accounting, FK checks
//! - `inquiries` - Contact form endpoint
