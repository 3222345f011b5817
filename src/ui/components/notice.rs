//! Notice component renderer.

use crate::ui::notice::{Notice, NoticeKind};

/// Renders one notice with its kind tag.
#[must_use]
pub fn render_notice(notice: &Notice) -> String {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
        NoticeKind::Info => "info",
    };
    format!("[{tag}] {}", notice.message)
}

#[cfg(test)]
mod tests {
    use super::render_notice;
    use crate::ui::notice::Notice;

    #[test]
    fn tags_follow_the_kind() {
        assert_eq!(render_notice(&Notice::success("done")), "[ok] done");
        assert_eq!(render_notice(&Notice::error("nope")), "[error] nope");
        assert_eq!(render_notice(&Notice::info("fyi")), "[info] fyi");
    }
}
