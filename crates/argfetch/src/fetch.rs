//! Identifier lookup and the top-level fetch calls.

use crate::{cursor::Cursor, error::FetchResult, target::Target};

/// First position of an exact match for `identifier`, if any.
///
/// Plain string equality; the option prefix is a calling convention, not
/// something lookup enforces.
fn locate<S: AsRef<str>>(args: &[S], identifier: &str) -> Option<usize> {
    args.iter().position(|arg| arg.as_ref() == identifier)
}

/// Searches `args` for `identifier` and reads the following tokens into
/// `target`.
///
/// Returns `Ok(false)` if the identifier does not occur, leaving the target
/// untouched. Otherwise the tokens after the first occurrence are converted
/// according to the target's shape (see [`Target`]) and `Ok(true)` is
/// returned. Conversion is all-or-nothing: on [`FetchError`] no slot has been
/// written.
///
/// One call handles one identifier spelling; fetch aliases with one call per
/// spelling and combine the found flags.
///
/// [`FetchError`]: crate::FetchError
///
/// # Example
///
/// ```
/// let args = ["prog", "--mix", "1.5", "2.5", "label"];
/// let (mut x, mut y, mut tag) = (0.0_f64, 0.0_f64, String::new());
/// let found = argfetch::fetch(&args, "--mix", (&mut x, &mut y, &mut tag))?;
/// assert!(found && x == 1.5 && y == 2.5 && tag == "label");
/// # Ok::<(), argfetch::FetchError>(())
/// ```
pub fn fetch<S: AsRef<str>>(args: &[S], identifier: &str, target: impl Target) -> FetchResult<bool> {
    let Some(at) = locate(args, identifier) else {
        return Ok(false);
    };
    let mut cursor = Cursor::new(identifier, &args[at + 1..]);
    target.fill(&mut cursor)?;
    Ok(true)
}

/// Like [`fetch`], reading the sequence from an iterator such as
/// [`std::env::args`].
///
/// Materializes the iterator into an owned sequence and delegates; purely an
/// adaptation shim for callers holding a raw argument stream rather than a
/// slice.
pub fn fetch_from<I>(args: I, identifier: &str, target: impl Target) -> FetchResult<bool>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    fetch(&args, identifier, target)
}
