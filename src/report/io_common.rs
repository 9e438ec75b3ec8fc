use crate::report::*;

/// The folder below `root` designated by the hierarchy components.
pub fn folder(root: &Path, components: &[String]) -> PathBuf {
    let mut p = root.to_path_buf();
    for c in components.iter() {
        p.push(c);
    }
    p
}

pub fn make_folder(path: &Path) -> WriteResult<()> {
    if !path.is_dir() {
        debug!("make_folder: creating {:?}", path);
    }
    fs::create_dir_all(path).context(CreatingDirSnafu { path })
}

/// The address of a page for the browser.
///
/// With a base URL, the page is expected to be served under its path, as a
/// local static server started in the working directory does. Otherwise the
/// file is opened directly. Every segment of the path is percent-encoded.
pub fn page_url(html_path: &Path, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) => {
            let rel = html_path.display().to_string().replace('\\', "/");
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                encode_segments(rel.trim_start_matches("./").trim_start_matches('/'))
            )
        }
        None => {
            let abs = fs::canonicalize(html_path).unwrap_or_else(|_| html_path.to_path_buf());
            let abs = abs.display().to_string().replace('\\', "/");
            format!("file:///{}", encode_segments(abs.trim_start_matches('/')))
        }
    }
}

fn encode_segments(path: &str) -> String {
    path.split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<String>>()
        .join("/")
}
