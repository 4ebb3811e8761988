// Resume authoring API: text parsing, fragment assembly, industry translation.

pub mod handlers;
