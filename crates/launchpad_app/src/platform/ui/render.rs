use std::fmt::Write as _;

use launchpad_core::{
    AppViewModel, LaunchDetailView, LaunchListView, LaunchRowView, ReadyDetailView, ScreenView,
    SlideView, SortDirection, SortKey,
};

use super::constants::*;

/// Renders the whole screen as plain text, followed by the command hint and `notice`.
pub fn render(view: &AppViewModel, notice: Option<&str>) -> String {
    let mut out = String::new();
    match &view.screen {
        ScreenView::List(list) => {
            render_list(&mut out, list);
            render_slides(&mut out, view.slide);
        }
        ScreenView::Detail(detail) => render_detail(&mut out, detail),
    }

    out.push('\n');
    out.push_str(COMMAND_HINT);
    out.push('\n');
    if let Some(notice) = notice {
        let _ = writeln!(out, "! {notice}");
    }
    out
}

fn render_list(out: &mut String, list: &LaunchListView) {
    let _ = writeln!(out, "{TITLE}\n");

    if let Some(error) = &list.error {
        let _ = writeln!(out, "Error");
        let _ = writeln!(out, "{LIST_ERROR}");
        let _ = writeln!(out, "Error details: {error}\n");
    }

    let _ = writeln!(
        out,
        "[{}]  [{}]   sorted by {} ({})\n",
        SORT_BY_NAME,
        SORT_BY_DATE,
        sort_label(list.sort.key),
        direction_label(list.sort.direction)
    );

    for (index, row) in list.rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, format_row(row));
    }

    if list.show_load_more {
        let disabled = if list.load_more_enabled { "" } else { " (disabled)" };
        let _ = writeln!(out, "\n      [{}]{}", list.load_more_label, disabled);
    }
}

fn format_row(row: &LaunchRowView) -> String {
    format!(
        "{} - {} ({})  {}",
        row.mission_name,
        row.date_label,
        row.badge.label(),
        row.href
    )
}

fn render_slides(out: &mut String, slide: SlideView) {
    let dots: Vec<&str> = (0..slide.count)
        .map(|index| if index == slide.current { "●" } else { "○" })
        .collect();
    let image = BACKGROUND_IMAGES.get(slide.current).copied().unwrap_or("");
    let _ = writeln!(out, "\n{}  {}", dots.join(" "), image);
}

fn render_detail(out: &mut String, detail: &LaunchDetailView) {
    match detail {
        LaunchDetailView::Loading => {
            let _ = writeln!(out, "Loading...");
        }
        LaunchDetailView::Error { message, back_href } => {
            let _ = writeln!(out, "Error: {message}\n");
            let _ = writeln!(out, "<- {BACK_TO_LIST} ({back_href})");
        }
        LaunchDetailView::Ready(ready) => render_ready(out, ready),
    }
}

fn render_ready(out: &mut String, ready: &ReadyDetailView) {
    let _ = writeln!(out, "{}\n", ready.mission_name);
    let _ = writeln!(out, "Launch Date: {}", ready.date_time_label);
    let _ = writeln!(out, "Status: [{}]", ready.badge.label());

    if let Some(details) = &ready.details {
        let _ = writeln!(out, "\nMission Details");
        let _ = writeln!(out, "{details}");
    }

    if ready.has_links() {
        let _ = writeln!(out, "\nRelated Links");
        if let Some(link) = &ready.article_link {
            let _ = writeln!(out, "  Read Article: {link}");
        }
        if let Some(link) = &ready.video_link {
            let _ = writeln!(out, "  Watch Video: {link}");
        }
    }

    let _ = writeln!(out, "\n<- {BACK_TO_LIST} ({})", ready.back_href);
}

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::MissionName => "mission name",
        SortKey::LaunchDate => "launch date",
    }
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_core::{
        init, update, DetailRequest, Effect, LaunchDetail, LaunchId, LaunchLinks, LaunchOutcome,
        LaunchSummary, LaunchTimestamp, Msg, Route,
    };

    fn loaded_detail(launch: LaunchDetail) -> AppViewModel {
        let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
        let request: DetailRequest = match effects.as_slice() {
            [Effect::FetchLaunch(request)] => request.clone(),
            _ => panic!("expected detail fetch"),
        };
        let (state, _) = update(state, Msg::LaunchLoaded { request, launch });
        state.view()
    }

    fn falconsat() -> LaunchDetail {
        LaunchDetail {
            mission_name: "FalconSat".to_string(),
            launch_date_local: LaunchTimestamp::new("2006-03-25T10:30:00+12:00"),
            outcome: LaunchOutcome::Failed,
            details: None,
            links: LaunchLinks::default(),
        }
    }

    #[test]
    fn detail_without_details_or_links_has_no_sections() {
        let text = render(&loaded_detail(falconsat()), None);

        assert!(text.contains("FalconSat"));
        assert!(text.contains("Launch Date: 3/25/2006, 10:30:00 AM"));
        assert!(text.contains("Status: [Failed]"));
        assert!(!text.contains("Mission Details"));
        assert!(!text.contains("Related Links"));
        assert!(!text.contains("Read Article"));
        assert!(!text.contains("Watch Video"));
        assert!(text.contains("<- Back to Launches (/)"));
    }

    #[test]
    fn detail_shows_present_sections_only() {
        let launch = LaunchDetail {
            details: Some("Engine failure at 33 seconds".to_string()),
            links: LaunchLinks {
                article_link: Some("https://example.com/article".to_string()),
                video_link: None,
            },
            ..falconsat()
        };
        let text = render(&loaded_detail(launch), None);

        assert!(text.contains("Mission Details\nEngine failure at 33 seconds"));
        assert!(text.contains("Read Article: https://example.com/article"));
        assert!(!text.contains("Watch Video"));
    }

    #[test]
    fn loading_detail_shows_only_progress() {
        let (state, _) = init(Route::Launch(LaunchId::new("abc")));
        let text = render(&state.view(), None);
        assert!(text.starts_with("Loading...\n"));
        assert!(!text.contains(BACK_TO_LIST));
    }

    #[test]
    fn failed_detail_links_back_to_list() {
        let (state, effects) = init(Route::Launch(LaunchId::new("abc")));
        let [Effect::FetchLaunch(request)] = effects.as_slice() else {
            panic!("expected detail fetch");
        };
        let (state, _) = update(
            state,
            Msg::LaunchFailed {
                request: request.clone(),
                message: "network error: connection refused".to_string(),
            },
        );
        let text = render(&state.view(), Some("try 'back'"));

        assert!(text.starts_with("Error: network error: connection refused"));
        assert!(text.contains("<- Back to Launches (/)"));
        assert!(text.ends_with("! try 'back'\n"));
    }

    #[test]
    fn list_rows_badges_and_load_more() {
        let (state, effects) = init(Route::List);
        let text = render(&state.view(), None);
        assert!(text.contains("[Loading...] (disabled)"));
        assert!(text.contains("sorted by launch date (descending)"));

        let [Effect::FetchLaunches(request)] = effects.as_slice() else {
            panic!("expected page fetch");
        };
        let launches = (0..10)
            .map(|i| LaunchSummary {
                id: LaunchId::new(format!("id{i}")),
                mission_name: format!("Mission {i}"),
                launch_date_local: LaunchTimestamp::new("2022-09-05T02:09:00-04:00"),
                outcome: if i == 0 {
                    LaunchOutcome::Pending
                } else {
                    LaunchOutcome::Succeeded
                },
            })
            .collect();
        let (state, _) = update(
            state,
            Msg::LaunchesLoaded {
                request: request.clone(),
                launches,
            },
        );
        let text = render(&state.view(), None);

        assert!(text.contains("  1. Mission 0 - 9/5/2022 (Upcoming)  /launch/id0"));
        assert!(text.contains(" 10. Mission 9 - 9/5/2022 (Success)  /launch/id9"));
        assert!(text.contains("[Load More]\n"));
        assert!(text.contains("● ○ ○ ○ ○"));
    }
}
