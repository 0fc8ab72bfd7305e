//! Core business logic for Finreport.
//!
//! This crate contains the report processing pipeline with ZERO web
//! dependencies. All domain types, balance derivation, and rendering
//! orchestration live here.
//!
//! # Modules
//!
//! - `statement` - Statement model, parsing, and balance derivation
//! - `report` - Registry, handler contract, rendering dispatch, service facade
//! - `template` - Template engine abstraction and label loading
//! - `pdf` - PDF composition and HTML-to-PDF conversion

pub mod pdf;
pub mod report;
pub mod statement;
pub mod template;
