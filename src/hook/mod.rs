//! The shell script installed as each git hook.
//!
//! One template serves every [`HookKind`]: the revisions it compares are filled
//! in through named placeholders rather than positional formatting, so the
//! `%b` format strings and ANSI escapes in the banner pass through untouched.

use crate::domain::HookKind;

/// The file whose change triggers the alert.
pub const LOCK_FILE: &str = "composer.lock";

const FROM: &str = "{{from}}";
const TO: &str = "{{to}}";
const LOCK: &str = "{{lock_file}}";

/// Generated hook body. Git's stderr is discarded and the script always exits 0:
/// an unknown revision (no `ORIG_HEAD` yet, initial clone) must not surface as
/// an error from a notification hook.
const TEMPLATE: &str = r#"#!/bin/sh

from="{{from}}"
to="{{to}}"

if git diff-tree -r --name-only --no-commit-id "$from" "$to" 2>/dev/null | grep -Fqx "{{lock_file}}"
then
    printf "%b" "\n"
    printf "%b" " \033[37;1;41m                                                                     \033[0m\n"
    printf "%b" " \033[37;1;41m ! ALERT ! \033[0;1;36m {{lock_file}} changed, run \"composer install\" \033[37;1;41m ! ALERT ! \033[0m\n"
    printf "%b" " \033[37;1;41m                                                                     \033[0m\n"
    printf "%b" "\n"
fi

exit 0
"#;

/// Render the script for `kind`.
pub fn render(kind: HookKind) -> String {
    let revisions = kind.revisions();
    TEMPLATE
        .replace(FROM, revisions.from)
        .replace(TO, revisions.to)
        .replace(LOCK, LOCK_FILE)
}
