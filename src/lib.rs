//! GTM Compass - Worksheet maturity assessment engine
//!
//! This crate implements a deterministic, rule-based analysis pipeline that
//! scores free-text answers to a go-to-market problem-statement worksheet
//! and produces explainable feedback and recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
