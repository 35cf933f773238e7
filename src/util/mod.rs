//! Cross-cutting helpers shared by the client modules.

pub mod persistence;
