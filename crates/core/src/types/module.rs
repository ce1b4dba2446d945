//! Dashboard module identifiers.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a registered module id.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown module: {0}")]
pub struct UnknownModule(pub String);

/// A registered dashboard module.
///
/// Module ids on the wire are kebab-case strings (`finance-send-qr`). Code
/// should refer to modules through this enum so typos fail to compile; the
/// access resolver still accepts raw ids because callers may ask about
/// modules that are not registered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    Dashboard,
    Users,
    Minerals,
    Orders,
    Enquiries,
    Finance,
    FinanceTransactions,
    FinanceSendQr,
    FinanceCallBuyer,
    FinanceReserveEscrow,
    FinanceTesting,
    FinanceLcIssued,
    FinanceRelease,
    Content,
    Analytics,
    Compliance,
    Disputes,
    Partners,
    Logistics,
    Insurance,
    Settings,
    MinerDashboard,
    SellMinerals,
}

impl Module {
    /// The module catalog in navigation order.
    pub const ALL: [Self; 23] = [
        Self::Dashboard,
        Self::Users,
        Self::Minerals,
        Self::Orders,
        Self::Enquiries,
        Self::Finance,
        Self::FinanceTransactions,
        Self::FinanceSendQr,
        Self::FinanceCallBuyer,
        Self::FinanceReserveEscrow,
        Self::FinanceTesting,
        Self::FinanceLcIssued,
        Self::FinanceRelease,
        Self::Content,
        Self::Analytics,
        Self::Compliance,
        Self::Disputes,
        Self::Partners,
        Self::Logistics,
        Self::Insurance,
        Self::Settings,
        Self::MinerDashboard,
        Self::SellMinerals,
    ];

    /// The module's wire id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Users => "users",
            Self::Minerals => "minerals",
            Self::Orders => "orders",
            Self::Enquiries => "enquiries",
            Self::Finance => "finance",
            Self::FinanceTransactions => "finance-transactions",
            Self::FinanceSendQr => "finance-send-qr",
            Self::FinanceCallBuyer => "finance-call-buyer",
            Self::FinanceReserveEscrow => "finance-reserve-escrow",
            Self::FinanceTesting => "finance-testing",
            Self::FinanceLcIssued => "finance-lc-issued",
            Self::FinanceRelease => "finance-release",
            Self::Content => "content",
            Self::Analytics => "analytics",
            Self::Compliance => "compliance",
            Self::Disputes => "disputes",
            Self::Partners => "partners",
            Self::Logistics => "logistics",
            Self::Insurance => "insurance",
            Self::Settings => "settings",
            Self::MinerDashboard => "miner-dashboard",
            Self::SellMinerals => "sell-minerals",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|module| module.as_str() == s)
            .ok_or_else(|| UnknownModule(s.to_owned()))
    }
}

impl AsRef<str> for Module {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
