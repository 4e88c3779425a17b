//! Main module for org-syntax functionality

pub mod affiliated;
pub mod ast;
pub mod config;
pub mod entities;
pub mod inlines;
