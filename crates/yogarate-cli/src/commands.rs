//! Subcommands and their arguments.

use clap::{Args, Subcommand};
use yogarate_core::{ClassType, Score, StudioLocation};

/// Available commands for rating instructors and browsing results.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the store and seed the default instructors if this is the first run
    Init,

    /// List instructors with their average rating
    Instructors {
        /// Only show instructors whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add an instructor by name
    AddInstructor {
        /// Full name of the instructor
        name: String,
    },

    /// Show one instructor's averages, breakdowns and ratings
    Show {
        /// Instructor id (see `yogarate instructors`)
        instructor_id: String,
    },

    /// Rate a class
    Rate(RateArgs),

    /// List every rated class, most recent first
    History,

    /// Toggle the favorite flag on a rating
    Favorite {
        /// Rating id (see `yogarate history`)
        rating_id: String,
    },

    /// List instructors with at least one favorite class
    Favorites,

    /// Show resolved paths for the data directory and store files
    Paths,
}

/// Arguments for `yogarate rate`.
///
/// Scores default to 3 and the categorical fields to the first choice, the
/// same pre-selection a fresh rating form has.
#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    /// Id of an existing instructor
    #[arg(long, conflicts_with = "new_instructor")]
    pub instructor: Option<String>,

    /// Name of an instructor to add (reuses an exact name match)
    #[arg(long)]
    pub new_instructor: Option<String>,

    /// Class type, e.g. "Yoga 2" or "hot-power-fusion"
    #[arg(long, default_value_t = ClassType::default())]
    pub class_type: ClassType,

    /// Studio location, e.g. "Capitol Hill"
    #[arg(long, default_value_t = StudioLocation::default())]
    pub location: StudioLocation,

    /// Overall rating (1-5)
    #[arg(long, default_value_t = Score::DEFAULT)]
    pub overall: Score,

    /// Intensity, from gentle yoga (1) to full workout (5)
    #[arg(long, default_value_t = Score::DEFAULT)]
    pub intensity: Score,

    /// Flow (1-5)
    #[arg(long, default_value_t = Score::DEFAULT)]
    pub flow: Score,

    /// Energy (1-5)
    #[arg(long, default_value_t = Score::DEFAULT)]
    pub energy: Score,

    /// Music (1-5)
    #[arg(long, default_value_t = Score::DEFAULT)]
    pub music: Score,

    /// Free-form notes about the class
    #[arg(long)]
    pub notes: Option<String>,

    /// Mark the class as a favorite
    #[arg(long)]
    pub favorite: bool,
}
