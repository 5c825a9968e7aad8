// QueueKeeper: rule-based moderation queue scanner for Reddit
//
// This is the library root. The binary in main.rs wires config, the
// Reddit client and the scan pipeline together.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod queue;
pub mod reddit;
pub mod rules;
