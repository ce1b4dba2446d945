//! Permission tokens and the wildcard contract.
//!
//! A permission token is a plain string such as `orders_read`. Tokens follow
//! the `<prefix>_<action>` convention, where the prefix is everything before
//! the **first** underscore (`qr_sent_mark` has prefix `qr`). A role's grant
//! list may contain three kinds of entries, see [`Grant`]:
//!
//! - `*` grants every token
//! - `<prefix>_*` grants every token whose prefix is `<prefix>`
//! - anything else grants exactly that token

/// Token vocabulary. Compile-time configuration; not editable at runtime.
pub mod permissions {
    /// Global wildcard.
    pub const ALL: &str = "*";

    pub const ORDERS_READ: &str = "orders_read";
    pub const ORDERS_WRITE: &str = "orders_write";
    pub const ORDERS_DELETE: &str = "orders_delete";
    pub const FINANCIAL_READ: &str = "financial_read";
    pub const FINANCIAL_WRITE: &str = "financial_write";
    pub const ESCROW_RESERVE: &str = "escrow_reserve";
    pub const QR_SEND: &str = "qr_send";
    pub const RELEASE_PAYMENT: &str = "release_payment";
    pub const LC_ISSUE: &str = "lc_issue";
    pub const TRANSPORT_READ: &str = "transport_read";
    pub const TRANSPORT_WRITE: &str = "transport_write";
    pub const ENQUIRY_READ: &str = "enquiry_read";
    pub const ENQUIRY_WRITE: &str = "enquiry_write";
    pub const USER_READ: &str = "user_read";
    pub const USER_BASIC: &str = "user_basic";
    pub const COMPLIANCE_READ: &str = "compliance_read";
    pub const DISPUTES_READ: &str = "disputes_read";
    pub const LOG_CREATE: &str = "log_create";
    pub const LOG_UPDATE: &str = "log_update";
    pub const QR_SENT_MARK: &str = "qr_sent_mark";

    /// Every concrete token, for validation and listings.
    pub const VOCABULARY: [&str; 20] = [
        ORDERS_READ,
        ORDERS_WRITE,
        ORDERS_DELETE,
        FINANCIAL_READ,
        FINANCIAL_WRITE,
        ESCROW_RESERVE,
        QR_SEND,
        RELEASE_PAYMENT,
        LC_ISSUE,
        TRANSPORT_READ,
        TRANSPORT_WRITE,
        ENQUIRY_READ,
        ENQUIRY_WRITE,
        USER_READ,
        USER_BASIC,
        COMPLIANCE_READ,
        DISPUTES_READ,
        LOG_CREATE,
        LOG_UPDATE,
        QR_SENT_MARK,
    ];
}

/// Suffix that turns a prefix into a prefix wildcard.
pub const WILDCARD_SUFFIX: &str = "_*";

/// One entry of a role's grant list, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
    /// `*`
    All,
    /// `<prefix>_*`, holding `<prefix>`.
    Prefix(&'a str),
    /// Any other token.
    Exact(&'a str),
}

impl<'a> Grant<'a> {
    /// Classify a grant-list entry.
    #[must_use]
    pub fn parse(entry: &'a str) -> Self {
        if entry == permissions::ALL {
            return Self::All;
        }
        entry
            .strip_suffix(WILDCARD_SUFFIX)
            .map_or(Self::Exact(entry), Self::Prefix)
    }

    /// Whether this grant covers `token` on its own.
    ///
    /// `Prefix` compares against the token's first-underscore prefix, so
    /// `qr_*` covers both `qr_send` and `qr_sent_mark`, and `orders_*` also
    /// covers the bare token `orders`.
    #[must_use]
    pub fn covers(self, token: &str) -> bool {
        match self {
            Self::All => true,
            Self::Prefix(prefix) => prefix_of(token) == prefix,
            Self::Exact(exact) => exact == token,
        }
    }
}

/// The part of `token` before its first underscore, or the whole token.
#[must_use]
pub fn prefix_of(token: &str) -> &str {
    token.split_once('_').map_or(token, |(prefix, _)| prefix)
}
