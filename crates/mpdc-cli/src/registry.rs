//! The table of commands `mpdc` understands.
//!
//! Each entry pairs a declarative [`CommandSpec`] with the behaviour that
//! runs it against an open session. Names are unique and appear in help
//! output in table order.

use std::fmt;

use mpdc_core::Session;
use mpdc_core::command::{Command, CommandSpec, ParamSpec, Pattern};

use crate::AppError;
use crate::commands::{admin, database, info, playback, playlist};
use crate::output::Printer;

/// Runs a bound command against an authenticated session.
pub(crate) type Behavior =
    fn(&Command<'_>, &mut Session, &mut Printer<'_>) -> Result<(), AppError>;

/// Help grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Admin,
    Info,
    Database,
    Playlist,
    Playback,
}

impl Category {
    pub(crate) const ALL: [Self; 5] = [
        Self::Admin,
        Self::Info,
        Self::Database,
        Self::Playlist,
        Self::Playback,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Admin => "Admin",
            Self::Info => "Info",
            Self::Database => "Database",
            Self::Playlist => "Playlist",
            Self::Playback => "Playback",
        })
    }
}

pub(crate) struct CommandDescriptor {
    pub(crate) spec: CommandSpec,
    pub(crate) category: Category,
    pub(crate) behavior: Behavior,
}

const fn entry(category: Category, spec: CommandSpec, behavior: Behavior) -> CommandDescriptor {
    CommandDescriptor {
        spec,
        category,
        behavior,
    }
}

const OUTPUT_ID: ParamSpec = ParamSpec::required(
    "id",
    "Id of the output device. Use 'outputs' to list valid ids.",
    Pattern::Integer,
);
const ROOT_PATH: ParamSpec = ParamSpec::optional(
    "path",
    "Directory or file to act as the root; defaults to the whole database.",
    Pattern::Any,
);
const SEARCH_TAG: ParamSpec = ParamSpec::required(
    "tag",
    "Metadata field to match, such as artist, album, title, or any.",
    Pattern::Tag,
);
const SEARCH_TERM: ParamSpec =
    ParamSpec::required("term", "Value to look for in @tag.", Pattern::Any);
const SONG_PATH: ParamSpec = ParamSpec::required(
    "path",
    "A file or directory; directories are added recursively.",
    Pattern::Any,
);
const SONG_POS: ParamSpec =
    ParamSpec::required("pos", "Position of the song in the playlist.", Pattern::Integer);
const SONG_ID: ParamSpec = ParamSpec::required("id", "Id of the song.", Pattern::Integer);
const PLAYLIST_NAME: ParamSpec =
    ParamSpec::required("name", "Name of the stored playlist.", Pattern::Any);
const PLAYLIST_VERSION: ParamSpec = ParamSpec::required(
    "version",
    "Playlist version to report changes since.",
    Pattern::Integer,
);
const SEEK_TIME: ParamSpec =
    ParamSpec::required("time", "Time in seconds to jump to.", Pattern::Integer);

const UPDATE_PARAMS: &[ParamSpec] = &[ParamSpec::optional(
    "path",
    "Directory or file to rescan; defaults to the whole music directory.",
    Pattern::Any,
)];
const LIST_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("tag1", "Metadata field to list.", Pattern::Tag),
    ParamSpec::optional(
        "tag2",
        "Metadata field to filter on; requires @term.",
        Pattern::Tag,
    ),
    ParamSpec::optional("term", "Value @tag2 must have.", Pattern::Any),
];
const ADDID_PARAMS: &[ParamSpec] = &[
    SONG_PATH,
    ParamSpec::optional("pos", "Position to insert at.", Pattern::Integer),
];
const RENAME_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("oldname", "Current name of the playlist.", Pattern::Any),
    ParamSpec::required("newname", "New name of the playlist.", Pattern::Any),
];
const MOVE_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("src", "Source position.", Pattern::Integer),
    ParamSpec::required("dest", "Target position.", Pattern::Integer),
];
const MOVEID_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("src", "Id of the song to move.", Pattern::Integer),
    ParamSpec::required("dest", "Target position.", Pattern::Integer),
];
const PLINFO_PARAMS: &[ParamSpec] = &[ParamSpec::optional(
    "pos",
    "Position of a single song to report.",
    Pattern::Integer,
)];
const SWAP_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("pos1", "First song position.", Pattern::Integer),
    ParamSpec::required("pos2", "Second song position.", Pattern::Integer),
];
const SWAPID_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("id1", "First song id.", Pattern::Integer),
    ParamSpec::required("id2", "Second song id.", Pattern::Integer),
];
const PLADD_PARAMS: &[ParamSpec] = &[
    PLAYLIST_NAME,
    ParamSpec::required("path", "File to add.", Pattern::Any),
];
const PLMOVE_PARAMS: &[ParamSpec] = &[
    PLAYLIST_NAME,
    SONG_ID,
    ParamSpec::required("pos", "New song position.", Pattern::Integer),
];
const PLSEARCH_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("tag", "Metadata field to search in.", Pattern::Tag),
    ParamSpec::required("term", "Text to search for.", Pattern::Any),
];
const CROSSFADE_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "time",
    "Crossfade time in seconds.",
    Pattern::Integer,
)];
const PAUSE_PARAMS: &[ParamSpec] = &[ParamSpec::required(
    "toggle",
    "on to pause, off to resume.",
    Pattern::OnOff,
)];
const SWITCH_PARAMS: &[ParamSpec] = &[ParamSpec::required("toggle", "on or off.", Pattern::OnOff)];
const VOLUME_PARAMS: &[ParamSpec] = &[
    ParamSpec::required("value", "Volume from 0 to 100.", Pattern::Integer),
    ParamSpec::optional(
        "sign",
        "+ or - to raise or lower the current volume by @value.",
        Pattern::Sign,
    ),
];

static COMMANDS: &[CommandDescriptor] = &[
    entry(
        Category::Admin,
        CommandSpec::new("disableoutput", "Turns an audio output off.", &[OUTPUT_ID]),
        admin::disableoutput,
    ),
    entry(
        Category::Admin,
        CommandSpec::new("enableoutput", "Turns an audio output on.", &[OUTPUT_ID]),
        admin::enableoutput,
    ),
    entry(
        Category::Admin,
        CommandSpec::new(
            "kill",
            "Stops the daemon safely, writing its state file if one is configured.",
            &[],
        ),
        admin::kill,
    ),
    entry(
        Category::Admin,
        CommandSpec::new(
            "update",
            "Rescans the music directory, adding new files and dropping removed ones.",
            UPDATE_PARAMS,
        ),
        admin::update,
    ),
    entry(
        Category::Info,
        CommandSpec::new("status", "Reports playback state and the current playback options.", &[]),
        info::status,
    ),
    entry(
        Category::Info,
        CommandSpec::new("simplestatus", "Reports basic status on one line.", &[]),
        info::simplestatus,
    ),
    entry(
        Category::Info,
        CommandSpec::new("stats", "Reports database and playlist statistics.", &[]),
        info::stats,
    ),
    entry(
        Category::Info,
        CommandSpec::new("outputs", "Lists all known audio outputs.", &[]),
        info::outputs,
    ),
    entry(
        Category::Info,
        CommandSpec::new("commands", "Lists the commands this client may use.", &[]),
        info::commands,
    ),
    entry(
        Category::Info,
        CommandSpec::new("notcommands", "Lists the commands this client may not use.", &[]),
        info::notcommands,
    ),
    entry(
        Category::Info,
        CommandSpec::new("tagtypes", "Lists the available song metadata fields.", &[]),
        info::tagtypes,
    ),
    entry(
        Category::Info,
        CommandSpec::new("urlhandlers", "Lists the available URL handlers.", &[]),
        info::urlhandlers,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "find",
            "Finds songs whose @tag exactly matches @term.",
            &[SEARCH_TAG, SEARCH_TERM],
        ),
        database::find,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "list",
            "Lists all values of @tag1, optionally among songs whose @tag2 is @term.",
            LIST_PARAMS,
        ),
        database::list,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "listall",
            "Lists all directories and files under @path recursively.",
            &[ROOT_PATH],
        ),
        database::listall,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "listallinfo",
            "Reports metadata of all files under @path recursively.",
            &[ROOT_PATH],
        ),
        database::listallinfo,
    ),
    entry(
        Category::Database,
        CommandSpec::new("lsinfo", "Lists the contents of @path.", &[ROOT_PATH]),
        database::lsinfo,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "search",
            "Finds songs whose @tag contains @term, ignoring case.",
            &[SEARCH_TAG, SEARCH_TERM],
        ),
        database::search,
    ),
    entry(
        Category::Database,
        CommandSpec::new(
            "count",
            "Counts songs whose @tag matches @term and their total play time.",
            &[SEARCH_TAG, SEARCH_TERM],
        ),
        database::count,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("add", "Adds a file or directory to the playlist.", &[SONG_PATH]),
        playlist::add,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "addid",
            "Adds a file to the playlist, optionally at @pos, and reports its id.",
            ADDID_PARAMS,
        ),
        playlist::addid,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("clear", "Clears the playlist.", &[]),
        playlist::clear,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("current", "Reports the song that is playing.", &[]),
        playlist::current,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("delete", "Removes the song at @pos from the playlist.", &[SONG_POS]),
        playlist::delete,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("deleteid", "Removes the song with @id from the playlist.", &[SONG_ID]),
        playlist::deleteid,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "load",
            "Appends the stored playlist @name to the playlist.",
            &[PLAYLIST_NAME],
        ),
        playlist::load,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("rename", "Renames a stored playlist.", RENAME_PARAMS),
        playlist::rename,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("move", "Moves the song at @src to position @dest.", MOVE_PARAMS),
        playlist::move_song,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("moveid", "Moves the song with id @src to position @dest.", MOVEID_PARAMS),
        playlist::moveid,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "plinfo",
            "Reports metadata of the playlist, or of the song at @pos.",
            PLINFO_PARAMS,
        ),
        playlist::plinfo,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "plchanges",
            "Reports songs changed since playlist @version.",
            &[PLAYLIST_VERSION],
        ),
        playlist::plchanges,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "plchangesid",
            "Reports positions and ids of songs changed since playlist @version.",
            &[PLAYLIST_VERSION],
        ),
        playlist::plchangesid,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("rm", "Deletes the stored playlist @name.", &[PLAYLIST_NAME]),
        playlist::rm,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("save", "Stores the playlist as @name.", &[PLAYLIST_NAME]),
        playlist::save,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("shuffle", "Shuffles the playlist.", &[]),
        playlist::shuffle,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("swap", "Swaps the songs at @pos1 and @pos2.", SWAP_PARAMS),
        playlist::swap,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("swapid", "Swaps the songs with ids @id1 and @id2.", SWAPID_PARAMS),
        playlist::swapid,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("listpl", "Lists the files in stored playlist @name.", &[PLAYLIST_NAME]),
        playlist::listpl,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "listplinfo",
            "Reports the songs in stored playlist @name.",
            &[PLAYLIST_NAME],
        ),
        playlist::listplinfo,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("pladd", "Adds @path to stored playlist @name.", PLADD_PARAMS),
        playlist::pladd,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new("plclear", "Clears stored playlist @name.", &[PLAYLIST_NAME]),
        playlist::plclear,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "pldelete",
            "Removes the song with @id from stored playlist @name.",
            &[PLAYLIST_NAME, SONG_ID],
        ),
        playlist::pldelete,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "plmove",
            "Moves the song with @id in stored playlist @name to @pos.",
            PLMOVE_PARAMS,
        ),
        playlist::plmove,
    ),
    entry(
        Category::Playlist,
        CommandSpec::new(
            "plsearch",
            "Searches the playlist, printing [pos:id] Artist - Album - Title (mm:ss).",
            PLSEARCH_PARAMS,
        ),
        playlist::plsearch,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("crossfade", "Sets crossfading between songs.", CROSSFADE_PARAMS),
        playback::crossfade,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("next", "Skips to the next song.", &[]),
        playback::next,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("pause", "Pauses or resumes playback.", PAUSE_PARAMS),
        playback::pause,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("play", "Plays the song at @pos.", &[SONG_POS]),
        playback::play,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("playid", "Plays the song with @id.", &[SONG_ID]),
        playback::playid,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("previous", "Goes back to the previous song.", &[]),
        playback::previous,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("random", "Turns random mode on or off.", SWITCH_PARAMS),
        playback::random,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("repeat", "Turns repeat mode on or off.", SWITCH_PARAMS),
        playback::repeat,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("seek", "Jumps to @time in the song at @pos.", &[SONG_POS, SEEK_TIME]),
        playback::seek,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("seekid", "Jumps to @time in the song with @id.", &[SONG_ID, SEEK_TIME]),
        playback::seekid,
    ),
    entry(
        Category::Playback,
        CommandSpec::new(
            "volume",
            "Sets the volume, or adjusts it by @value when @sign is given.",
            VOLUME_PARAMS,
        ),
        playback::volume,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("stop", "Stops playback.", &[]),
        playback::stop,
    ),
    entry(
        Category::Playback,
        CommandSpec::new("toggle", "Toggles between play and pause.", &[]),
        playback::toggle,
    ),
];

/// Every command in help order.
pub(crate) fn commands() -> &'static [CommandDescriptor] {
    COMMANDS
}

/// Finds the command called `name`.
pub(crate) fn lookup(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|descriptor| descriptor.spec.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_holds_every_command_once() {
        let names: HashSet<&str> = COMMANDS.iter().map(|entry| entry.spec.name).collect();
        assert_eq!(COMMANDS.len(), 57);
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn required_parameters_precede_optional_ones() {
        for descriptor in COMMANDS {
            let params = descriptor.spec.params;
            let first_optional = params.iter().position(|param| param.optional);
            if let Some(index) = first_optional {
                assert!(
                    params.iter().skip(index).all(|param| param.optional),
                    "{} declares a required parameter after an optional one",
                    descriptor.spec.name
                );
            }
        }
    }

    #[test]
    fn lookup_finds_by_exact_name() {
        assert!(lookup("plsearch").is_some());
        assert!(lookup("Status").is_none());
        assert!(lookup("currentsong").is_none());
    }
}
