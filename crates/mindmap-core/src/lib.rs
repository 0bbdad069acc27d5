//! Mindmap Core Types and Definitions
//!
//! This crate provides the foundational types shared by the mind-map layout
//! engine and its front ends. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Points and vertical bands ([`geometry`] module)
//! - **Nodes**: Concept nodes, their levels and sides ([`node`] module)
//! - **Edges**: Parent→child edges and their rendering hints ([`edge`] module)

pub mod edge;
pub mod geometry;
pub mod identifier;
pub mod node;
