//! Database-backed API tests.
//!
//! These exercise the full stack — router, services, repositories, and a
//! real PostgreSQL instance. Set `BOOKSHELF_TEST_DATABASE_URL` to a
//! disposable database; when unset every test here skips.

mod helpers;

mod auth_test;
mod book_test;
mod review_test;
