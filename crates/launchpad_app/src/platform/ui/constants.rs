use launchpad_core::SLIDE_COUNT;

pub const TITLE: &str = "SpaceX Launches";
pub const SORT_BY_NAME: &str = "Sort by Mission Name";
pub const SORT_BY_DATE: &str = "Sort by Launch Date";
pub const BACK_TO_LIST: &str = "Back to Launches";
pub const LIST_ERROR: &str =
    "An error occurred while fetching the launches. Please try again later.";

pub const BACKGROUND_IMAGES: [&str; SLIDE_COUNT] = [
    "https://images.unsplash.com/photo-1517976384346-3136801d605d",
    "https://images.unsplash.com/photo-1517976487492-5750f3195933",
    "https://images.unsplash.com/photo-1516849677043-ef67c9557e16",
    "https://images.pexels.com/photos/586054/pexels-photo-586054.jpeg",
    "https://images.pexels.com/photos/60126/pexels-photo-60126.jpeg",
];

pub const COMMAND_HINT: &str =
    "commands: more | sort name | sort date | open <row|id> | go <path> | back | slide <n> | help | quit";

pub const HELP: &str = "\
more            load the next page of launches
sort name       sort by mission name (repeat to reverse)
sort date       sort by launch date (repeat to reverse)
open <row>      open the launch in that row of the list
open <id>       open a launch by id
go <path>       follow a path such as / or /launch/<id>
back            return to the launch list
slide <n>       show background n
help            show this text
quit            exit";
