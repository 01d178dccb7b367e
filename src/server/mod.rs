//! Server application core modules.
//!
//! This module contains all server-side functionality for the Bantay portal, including
//! HTTP routing, database operations, the change-event hub behind the live emergency
//! feed, and the geofencing CRUD surface used by the hazard map.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
