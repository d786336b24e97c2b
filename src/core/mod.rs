//! Core functionality for documents, vault scanning, editing and configuration

pub mod config;
pub mod document;
pub mod editor;
pub mod file_system;
