//! Interactive menu modes.

use std::fmt;

use knapbench_solver::Algorithm;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Exit,
    BruteForce,
    Backtracking,
    DynamicProgramming,
    Greedy,
    CompareAll,
    SmallSweep,
    LargeSweep,
}

impl Mode {
    /// Every mode in menu order, starting at 1 and ending with exit.
    pub const MENU: [Mode; 8] = [
        Mode::BruteForce,
        Mode::Backtracking,
        Mode::DynamicProgramming,
        Mode::Greedy,
        Mode::CompareAll,
        Mode::SmallSweep,
        Mode::LargeSweep,
        Mode::Exit,
    ];

    /// Maps a menu number to its mode.
    ///
    /// ```
    /// use knapbench_benchmark::Mode;
    ///
    /// assert_eq!(Mode::from_menu(0), Some(Mode::Exit));
    /// assert_eq!(Mode::from_menu(5), Some(Mode::CompareAll));
    /// assert_eq!(Mode::from_menu(8), None);
    /// ```
    pub fn from_menu(choice: u32) -> Option<Self> {
        match choice {
            0 => Some(Mode::Exit),
            1 => Some(Mode::BruteForce),
            2 => Some(Mode::Backtracking),
            3 => Some(Mode::DynamicProgramming),
            4 => Some(Mode::Greedy),
            5 => Some(Mode::CompareAll),
            6 => Some(Mode::SmallSweep),
            7 => Some(Mode::LargeSweep),
            _ => None,
        }
    }

    pub fn menu_number(self) -> u32 {
        match self {
            Mode::Exit => 0,
            Mode::BruteForce => 1,
            Mode::Backtracking => 2,
            Mode::DynamicProgramming => 3,
            Mode::Greedy => 4,
            Mode::CompareAll => 5,
            Mode::SmallSweep => 6,
            Mode::LargeSweep => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Exit => "Exit",
            Mode::BruteForce => "Brute force",
            Mode::Backtracking => "Backtracking",
            Mode::DynamicProgramming => "Dynamic programming",
            Mode::Greedy => "Greedy",
            Mode::CompareAll => "Run all four algorithms",
            Mode::SmallSweep => "Small-scale comparison (all algorithms)",
            Mode::LargeSweep => "Large-scale comparison (DP and greedy only)",
        }
    }

    /// The algorithm run by a single-algorithm mode.
    pub fn algorithm(self) -> Option<Algorithm> {
        match self {
            Mode::BruteForce => Some(Algorithm::BruteForce),
            Mode::Backtracking => Some(Algorithm::Backtracking),
            Mode::DynamicProgramming => Some(Algorithm::DynamicProgramming),
            Mode::Greedy => Some(Algorithm::Greedy),
            _ => None,
        }
    }

    /// Whether the mode asks for an item count and a capacity.
    pub fn prompts_for_instance(self) -> bool {
        matches!(
            self,
            Mode::BruteForce
                | Mode::Backtracking
                | Mode::DynamicProgramming
                | Mode::Greedy
                | Mode::CompareAll
        )
    }

    /// Whether the item count is clamped to the exhaustive cap.
    pub fn caps_item_count(self) -> bool {
        self.algorithm().is_some_and(Algorithm::is_exponential)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.menu_number(), self.label())
    }
}
