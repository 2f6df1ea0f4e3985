use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::assignment::Priority;
use crate::domain::entities::subject::{
    Subject, SubjectSelection, ToggleOutcome, MAX_SELECTED_SUBJECTS,
};
use crate::infra::config::settings::AppConfig;
use crate::infra::import::xlsx::CalamineDecoder;
use crate::platform::desktop::blocking::{read_picked_file, run_blocking};
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::decoder::ImportError;
use crate::usecase::services::import_service::{ImportService, SUPPORTED_EXTENSIONS};
use crate::usecase::services::schedule_session::{ScheduleMessage, UploadStatus};

pub fn root_container_style() -> &'static str {
    "min-height: 100vh; display: flex; flex-direction: column; gap: 16px; font-family: sans-serif; background: #f6f8fb;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f2f2f2; border: 1px solid #bbb; padding: 6px; text-align: left;"
}

pub fn subject_button_style(selected: bool) -> &'static str {
    if selected {
        "border: 1px solid #2a6df4; background: #2a6df4; color: #fff; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; color: #222; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    }
}

pub fn upload_button_label(status: &UploadStatus) -> String {
    match status {
        UploadStatus::Idle => "Upload Schedule".to_string(),
        UploadStatus::Uploading(_) => "Processing...".to_string(),
        UploadStatus::Success(file_name) => format!("Successfully uploaded: {file_name}"),
        UploadStatus::Error(_) => "Upload failed".to_string(),
    }
}

pub fn upload_status_text(status: &UploadStatus) -> String {
    match status {
        UploadStatus::Idle => "Ready".to_string(),
        UploadStatus::Uploading(file_name) => format!("Reading {file_name}"),
        UploadStatus::Success(_) => "Excel file processed successfully".to_string(),
        UploadStatus::Error(message) => message.clone(),
    }
}

pub fn selection_hint(
    selection: &SubjectSelection,
    last_toggle: Option<(Subject, ToggleOutcome)>,
) -> String {
    let count = selection.len();
    match last_toggle {
        Some((subject, ToggleOutcome::Rejected)) => format!(
            "{count} / {MAX_SELECTED_SUBJECTS} selected. Deselect a subject before adding {subject}."
        ),
        _ => format!("{count} / {MAX_SELECTED_SUBJECTS} selected"),
    }
}

pub fn table_caption(is_placeholder: bool, visible: usize) -> &'static str {
    match (is_placeholder, visible) {
        (_, 0) => "No assignments match the selected subjects.",
        (true, _) => "Sample deadlines. Upload your schedule to replace them.",
        (false, _) => "A list of looming deadlines.",
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let AppState {
        mut session,
        mut busy,
        mut status,
    } = AppState::new();
    let import_service = use_hook(|| Arc::new(ImportService::new(Arc::new(CalamineDecoder))));

    let snapshot = session.read().clone();
    let visible = snapshot.visible_assignments();
    let hint = selection_hint(snapshot.selection(), snapshot.last_toggle());
    let button_label = upload_button_label(snapshot.status());
    let caption = table_caption(snapshot.is_placeholder(), visible.len());
    let show_reset = *snapshot.status() != UploadStatus::Idle;
    let selection_full = snapshot.selection().is_full();

    rsx! {
        div {
            style: "{root_container_style()}",
            header {
                style: "border-bottom: 1px solid #ddd; background: #fff; padding: 24px; text-align: center;",
                h1 { style: "margin: 0;", "{config.title}" }
            }

            div {
                style: "padding: 8px 20px; text-align: center;",
                p { style: "margin: 0 0 6px 0; font-size: 18px;", "{config.welcome_message}" }
                p { style: "margin: 0; color: #666;", "Select your subjects and manage your assignments" }
            }

            section {
                style: "background: #fff; border: 1px solid #ddd; border-radius: 8px; margin: 0 24px; padding: 16px;",
                h2 { style: "text-align: center; margin-top: 0;", "Select Your Subjects" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; justify-content: center;",
                    {Subject::CATALOG.into_iter().map(|subject| {
                        let selected = snapshot.selection().contains(subject);
                        let label = subject.label();
                        let tooltip = if selection_full && !selected {
                            format!("Up to {MAX_SELECTED_SUBJECTS} subjects")
                        } else {
                            String::new()
                        };
                        rsx!(
                            button {
                                key: "{label}",
                                style: "{subject_button_style(selected)}",
                                title: "{tooltip}",
                                onclick: move |_| {
                                    session.write().apply(ScheduleMessage::ToggleSubject(subject));
                                },
                                "{label}"
                            }
                        )
                    })}
                }
                p { style: "text-align: center; color: #666; margin-bottom: 0;", "{hint}" }
            }

            nav {
                style: "display: flex; gap: 12px; align-items: center; justify-content: center; flex-wrap: wrap;",
                button {
                    disabled: busy(),
                    style: "border: 1px solid #2a6df4; background: #eef4ff; padding: 10px 24px; border-radius: 8px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Excel", &SUPPORTED_EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "Upload cancelled".to_string();
                            return;
                        };

                        *busy.write() = true;

                        let (file_name, result) = match run_blocking(|| read_picked_file(&file_path)) {
                            Ok(picked) => {
                                session
                                    .write()
                                    .apply(ScheduleMessage::UploadStarted(picked.file_name.clone()));
                                let result = run_blocking(|| {
                                    import_service.import(&picked.file_name, &picked.bytes)
                                });
                                (picked.file_name, result)
                            }
                            Err(err) => {
                                tracing::warn!(error = %err, "failed to read selected file");
                                (
                                    file_path.display().to_string(),
                                    Err(ImportError::DecodeFailure(err.to_string())),
                                )
                            }
                        };

                        session
                            .write()
                            .apply(ScheduleMessage::UploadFinished(file_name, result));
                        *status.write() = upload_status_text(session.read().status());
                        *busy.write() = false;
                    },
                    "{button_label}"
                }

                if show_reset {
                    button {
                        style: "border: none; background: transparent; color: #666; cursor: pointer;",
                        onclick: move |_| {
                            session.write().apply(ScheduleMessage::ResetUpload);
                            *status.write() = upload_status_text(session.read().status());
                        },
                        "Upload another file"
                    }
                }

                span { " {status}" }
            }

            section {
                style: "background: #fff; border: 1px solid #ddd; border-radius: 8px; margin: 0 24px 24px 24px; padding: 16px; overflow: auto;",
                h2 { style: "text-align: center; margin-top: 0;", "Assignment Deadlines" }
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    caption { style: "caption-side: bottom; padding-top: 8px; color: #666;", "{caption}" }
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}", "Class" }
                            th { style: "{table_header_cell_style()}", "Assignment" }
                            th { style: "{table_header_cell_style()}", "Due Date" }
                            th { style: "{table_header_cell_style()} text-align: right;", "Priority" }
                        }
                    }
                    tbody {
                        {visible.iter().map(|(row, assignment)| {
                            let row = *row;
                            let current = assignment.priority;
                            rsx!(
                                tr {
                                    key: "{row}",
                                    td { style: "border: 1px solid #bbb; padding: 4px; font-weight: 600;", "{assignment.class}" }
                                    td { style: "border: 1px solid #bbb; padding: 4px;", "{assignment.assignment}" }
                                    td { style: "border: 1px solid #bbb; padding: 4px;", "{assignment.date}" }
                                    td { style: "border: 1px solid #bbb; padding: 4px; text-align: right;",
                                        select {
                                            value: "{current}",
                                            onchange: move |event| {
                                                match event.value().parse::<Priority>() {
                                                    Ok(priority) => session
                                                        .write()
                                                        .apply(ScheduleMessage::SetPriority(row, priority)),
                                                    Err(err) => tracing::warn!(%err, "ignored priority change"),
                                                }
                                            },
                                            {Priority::ALL.into_iter().map(|priority| rsx!(
                                                option {
                                                    value: "{priority}",
                                                    selected: priority == current,
                                                    "{priority}"
                                                }
                                            ))}
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}
