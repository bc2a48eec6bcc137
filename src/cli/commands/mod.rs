mod reset;
mod show;

pub use reset::reset_profile;
pub use show::show_profile;
