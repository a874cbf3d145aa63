//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for receipt rendering. The IR is a
//! "bytecode" representation that sits between declarative components
//! and the pixels of the exported card.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌───────────┐
//! │ Components  │ ──► │     IR      │ ──► │  Raster   │
//! │(declarative)│     │  (Vec<Op>)  │     │  (PNG)    │
//! └─────────────┘     └─────────────┘     └───────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Debug and visualize what will be drawn
//! 2. **Testable**: Unit test layouts without rasterizing
//! 3. **Backend-neutral**: The same program drives the raster backend
//!    and structural assertions in tests
//!
//! ## Example
//!
//! ```
//! use recibo::ir::{Alignment, Op, Program};
//!
//! let mut program = Program::with_init();
//! program.push(Op::SetAlign(Alignment::Center));
//! program.push(Op::SetBold(true));
//! program.push(Op::Text("HELLO".into()));
//! program.push(Op::Newline);
//!
//! // Inspect the IR
//! println!("{:#?}", program);
//! ```

mod ops;

pub use ops::*;
