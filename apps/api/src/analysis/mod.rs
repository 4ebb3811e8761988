// Resume analysis API: keyword extraction, JD comparison, health audit, career fit.
// All scoring lives in ats-core; handlers only shape requests and responses.

pub mod handlers;
