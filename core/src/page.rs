//! Page object for the coverage-selection form.
//!
//! # Design
//! Element location and interaction are delegated to a `PageDriver`
//! implementation: a real browser binding in a full setup, a scripted
//! driver in tests. This module owns the locator table, the state-code
//! partition, and the interaction logic, nothing else.
//!
//! The application under test exposes the coverage panel only to the V2
//! customer segment (state codes WI, OH, IL, NV). Whenever the panel
//! (re)appears the selection resets to `None`, including when switching
//! between two V2 states.

use thiserror::Error;

/// Selectors for the coverage-selection page.
pub mod locators {
    pub const PAGE_PATH: &str = "/app/public/index.html";
    pub const STATE_SELECT: &str = "#state-select";
    pub const COVERAGE_SECTION: &str = "#coverage-section";
    pub const COVERAGE_NONE: &str = "#coverage-none";
    pub const COVERAGE_SILVER: &str = "#coverage-silver";
    pub const COVERAGE_GOLD: &str = "#coverage-gold";
    pub const COVERAGE_PLATINUM: &str = "#coverage-platinum";
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("driver failure: {0}")]
    Driver(String),
}

/// State codes the form accepts, partitioned into the V2 segment (coverage
/// panel shown) and the V1 segment (panel hidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCode {
    Wi,
    Oh,
    Il,
    Nv,
    Tx,
    Ny,
    Ca,
}

impl StateCode {
    pub const V2: [StateCode; 4] = [StateCode::Wi, StateCode::Oh, StateCode::Il, StateCode::Nv];
    pub const V1: [StateCode; 3] = [StateCode::Tx, StateCode::Ny, StateCode::Ca];

    pub fn as_str(self) -> &'static str {
        match self {
            StateCode::Wi => "WI",
            StateCode::Oh => "OH",
            StateCode::Il => "IL",
            StateCode::Nv => "NV",
            StateCode::Tx => "TX",
            StateCode::Ny => "NY",
            StateCode::Ca => "CA",
        }
    }

    /// Whether this state belongs to the V2 segment.
    pub fn shows_coverage(self) -> bool {
        Self::V2.contains(&self)
    }
}

/// The four mutually exclusive coverage options. `None` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageOption {
    None,
    Silver,
    Gold,
    Platinum,
}

impl CoverageOption {
    pub const ALL: [CoverageOption; 4] = [
        CoverageOption::None,
        CoverageOption::Silver,
        CoverageOption::Gold,
        CoverageOption::Platinum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageOption::None => "None",
            CoverageOption::Silver => "Silver",
            CoverageOption::Gold => "Gold",
            CoverageOption::Platinum => "Platinum",
        }
    }

    pub fn locator(self) -> &'static str {
        match self {
            CoverageOption::None => locators::COVERAGE_NONE,
            CoverageOption::Silver => locators::COVERAGE_SILVER,
            CoverageOption::Gold => locators::COVERAGE_GOLD,
            CoverageOption::Platinum => locators::COVERAGE_PLATINUM,
        }
    }
}

/// External page-automation capability the page object drives.
pub trait PageDriver {
    fn goto(&mut self, path: &str) -> Result<(), PageError>;
    fn select_option(&mut self, selector: &str, value: &str) -> Result<(), PageError>;
    fn click(&mut self, selector: &str) -> Result<(), PageError>;
    fn is_visible(&self, selector: &str) -> Result<bool, PageError>;
    fn is_checked(&self, selector: &str) -> Result<bool, PageError>;
    fn selected_value(&self, selector: &str) -> Result<String, PageError>;
}

/// Interactions and queries for the coverage-selection page.
pub struct CoverageSelectionPage<D: PageDriver> {
    driver: D,
}

impl<D: PageDriver> CoverageSelectionPage<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn open(&mut self) -> Result<(), PageError> {
        self.driver.goto(locators::PAGE_PATH)
    }

    pub fn select_state(&mut self, state: StateCode) -> Result<(), PageError> {
        self.driver
            .select_option(locators::STATE_SELECT, state.as_str())
    }

    /// Clears the state dropdown back to its empty initial value.
    pub fn clear_state(&mut self) -> Result<(), PageError> {
        self.driver.select_option(locators::STATE_SELECT, "")
    }

    pub fn select_coverage(&mut self, option: CoverageOption) -> Result<(), PageError> {
        self.driver.click(option.locator())
    }

    pub fn coverage_section_visible(&self) -> Result<bool, PageError> {
        self.driver.is_visible(locators::COVERAGE_SECTION)
    }

    pub fn option_visible(&self, option: CoverageOption) -> Result<bool, PageError> {
        self.driver.is_visible(option.locator())
    }

    pub fn all_options_visible(&self) -> Result<bool, PageError> {
        for option in CoverageOption::ALL {
            if !self.option_visible(option)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The currently checked option, or `None` when nothing is checked
    /// (panel hidden or page freshly loaded).
    pub fn selected_coverage(&self) -> Result<Option<CoverageOption>, PageError> {
        for option in CoverageOption::ALL {
            if self.driver.is_checked(option.locator())? {
                return Ok(Some(option));
            }
        }
        Ok(None)
    }

    pub fn selected_state(&self) -> Result<String, PageError> {
        self.driver.selected_value(locators::STATE_SELECT)
    }
}
