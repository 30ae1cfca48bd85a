//! タスクボードの状態管理
//!
//! グローバル変数に散っていた tasks / feedbackList / 採番カウンタを
//! ストアに集約する。UI層は BoardEvent を apply して、返ってきた
//! Mutation に応じて該当リストを永続化・再描画するだけにする。

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// カラム識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// カラム見出し
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// タスク（変更は状態の付け替えと削除のみ、編集機能はない）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub created_at: String,
}

/// フィードバック（収集のみ、画面には出さない）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default)]
    pub email: String,
    pub date: String,
}

/// UI入力イベント
#[derive(Debug, Clone)]
pub enum BoardEvent {
    TaskCreated {
        status: TaskStatus,
        title: String,
        description: String,
        created_at: String,
    },
    TaskDropped {
        id: u64,
        status: TaskStatus,
    },
    TaskDeleted {
        id: u64,
    },
    FeedbackSubmitted {
        kind: String,
        text: String,
        email: String,
        date: String,
    },
}

/// applyが変更した永続化対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Tasks,
    Feedback,
    None,
}

/// タスクとフィードバックのストア
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStore {
    tasks: Vec<Task>,
    feedback: Vec<Feedback>,
    task_id_counter: u64,
    feedback_id_counter: u64,
}

impl BoardStore {
    /// 空のストア。カウンタは起動時刻のエポックミリ秒で初期化する
    pub fn new(seed: u64) -> Self {
        Self {
            tasks: Vec::new(),
            feedback: Vec::new(),
            task_id_counter: seed,
            feedback_id_counter: seed,
        }
    }

    /// 永続化済みリストから復元する
    pub fn restore(tasks: Vec<Task>, feedback: Vec<Feedback>, seed: u64) -> Self {
        Self {
            tasks,
            feedback,
            task_id_counter: seed,
            feedback_id_counter: seed,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// 指定カラムのタスク（リスト順）
    pub fn tasks_for(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect()
    }

    /// カラムのバッジ数。毎回全走査するのでリストと常に一致する
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// イベントを適用し、永続化すべきリストを返す
    pub fn apply(&mut self, event: BoardEvent) -> Mutation {
        match event {
            BoardEvent::TaskCreated {
                status,
                title,
                description,
                created_at,
            } => {
                self.add_task(title, description, status, created_at);
                Mutation::Tasks
            }
            BoardEvent::TaskDropped { id, status } => {
                if self.move_task(id, status) {
                    Mutation::Tasks
                } else {
                    Mutation::None
                }
            }
            BoardEvent::TaskDeleted { id } => {
                self.delete_task(id);
                Mutation::Tasks
            }
            BoardEvent::FeedbackSubmitted {
                kind,
                text,
                email,
                date,
            } => {
                self.add_feedback(kind, text, email, date);
                Mutation::Feedback
            }
        }
    }

    /// タスクを追加し、採番したidを返す（idは単調増加）
    pub fn add_task(
        &mut self,
        title: String,
        description: String,
        status: TaskStatus,
        created_at: String,
    ) -> u64 {
        self.task_id_counter += 1;
        let id = self.task_id_counter;
        self.tasks.push(Task {
            id,
            title,
            description,
            status,
            created_at,
        });
        id
    }

    /// idで削除する（存在しなければ何もしない）
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// ドロップ先カラムへ付け替える
    pub fn move_task(&mut self, id: u64, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// フィードバックを追加し、採番したidを返す
    pub fn add_feedback(&mut self, kind: String, text: String, email: String, date: String) -> u64 {
        self.feedback_id_counter += 1;
        let id = self.feedback_id_counter;
        self.feedback.push(Feedback {
            id,
            kind,
            text,
            email,
            date,
        });
        id
    }

    /// タスクリストの永続化ペイロード（毎回全量を書き戻す）
    pub fn tasks_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.tasks)?)
    }

    /// フィードバックリストの永続化ペイロード
    pub fn feedback_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.feedback)?)
    }
}

/// 保存済みタスクリストを読み出す（壊れていたら空に倒す）
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// 保存済みフィードバックリストを読み出す（壊れていたら空に倒す）
pub fn decode_feedback(raw: &str) -> Vec<Feedback> {
    serde_json::from_str(raw).unwrap_or_default()
}
