// Domain layer: input and result models shared by the engine, lookup and CLI.

pub mod model;
