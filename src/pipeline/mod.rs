// Pipelines: end-to-end runs that tie the client, rules and output together.

pub mod scan;
