//! Workspace-level integration tests for Strassen-rs.
