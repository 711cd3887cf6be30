use std::ffi::OsString;

use super::errors::AppError;

/// Converts raw process arguments (program name already skipped) into tokens.
///
/// Positions in errors are 1-based, matching how users count arguments.
pub fn collect_tokens<I>(args: I) -> Result<Vec<String>, AppError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string()
                .map_err(|raw| AppError::NonUnicodeArgument {
                    position: index + 1,
                    lossy: raw.to_string_lossy().into_owned(),
                })
        })
        .collect()
}
