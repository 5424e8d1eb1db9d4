//! Common initialisms spelled fully upper-case in identifiers
//!
//! The list follows golang/lint.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static COMMON_INITIALISMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
        "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP",
        "TLS", "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP",
        "XSRF", "XSS",
    ]
    .into_iter()
    .collect()
});

/// The canonical upper-case spelling of `s`, when its upper-cased form is a
/// known initialism
pub(super) fn canonical_initialism(s: &str) -> Option<String> {
    let upper = s.to_uppercase();
    COMMON_INITIALISMS.contains(upper.as_str()).then_some(upper)
}
