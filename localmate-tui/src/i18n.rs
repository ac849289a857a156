/// Display languages supported by the client. Persian renders right-aligned,
/// the terminal analogue of the RTL page direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Fa,
}

impl Lang {
    pub fn parse(s: &str) -> Self {
        match s {
            "fa" => Lang::Fa,
            _ => Lang::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fa => "fa",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Lang::Fa)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Lang::En => Lang::Fa,
            Lang::Fa => Lang::En,
        }
    }
}

/// Look up a display string. Unknown keys fall back to the key itself so a
/// missing translation never renders blank.
pub fn lookup(lang: Lang, key: &str) -> &str {
    let table = match lang {
        Lang::En => en(key),
        Lang::Fa => fa(key),
    };
    table.unwrap_or(key)
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "tasks" => "Tasks",
        "today_tasks" => "Today's Tasks",
        "pending_tasks" => "Pending Tasks",
        "empty_today" => "No tasks for today",
        "empty_pending" => "No pending tasks",
        "add_task" => "Add Task",
        "task_title" => "Title",
        "task_description" => "Description",
        "due_date" => "Due date",
        "move_to_today" => "Move to today",
        "delete" => "Delete",
        "confirm_delete" => "Are you sure you want to delete this task?",
        "yes" => "Yes",
        "no" => "No",
        "task_added" => "Task added successfully",
        "task_moved" => "Task moved to today",
        "task_deleted" => "Task deleted",
        "task_create_failed" => "Error creating task",
        "task_toggle_failed" => "Error toggling task",
        "task_move_failed" => "Error moving task",
        "task_delete_failed" => "Error deleting task",
        "task_fetch_failed" => "Error fetching tasks",
        "title_and_date_required" => "Please enter title and date",
        "timer" => "Study Timer",
        "select_task" => "Select a task",
        "select_task_first" => "Please select a task first",
        "enter_duration" => "Please enter a valid duration",
        "duration_minutes" => "Duration (minutes)",
        "start_timer" => "Start",
        "stop_timer" => "Stop",
        "timer_completed" => "Time's up! Session saved",
        "timer_save_failed" => "Error saving time entry",
        "total_time" => "Total time",
        "hours" => "hours",
        "minutes" => "minutes",
        "language" => "Language",
        _ => return None,
    })
}

fn fa(key: &str) -> Option<&'static str> {
    Some(match key {
        "tasks" => "وظایف",
        "today_tasks" => "وظایف امروز",
        "pending_tasks" => "وظایف در انتظار",
        "empty_today" => "وظیفه‌ای برای امروز نیست",
        "empty_pending" => "وظیفه در انتظاری نیست",
        "add_task" => "افزودن وظیفه",
        "task_title" => "عنوان",
        "task_description" => "توضیحات",
        "due_date" => "تاریخ سررسید",
        "move_to_today" => "انتقال به امروز",
        "delete" => "حذف",
        "confirm_delete" => "آیا از حذف این وظیفه مطمئن هستید؟",
        "yes" => "بله",
        "no" => "خیر",
        "task_added" => "وظیفه با موفقیت اضافه شد",
        "task_moved" => "وظیفه به امروز منتقل شد",
        "task_deleted" => "وظیفه حذف شد",
        "task_create_failed" => "خطا در ایجاد وظیفه",
        "task_toggle_failed" => "خطا در تغییر وضعیت وظیفه",
        "task_move_failed" => "خطا در انتقال وظیفه",
        "task_delete_failed" => "خطا در حذف وظیفه",
        "task_fetch_failed" => "خطا در دریافت وظایف",
        "title_and_date_required" => "لطفا عنوان و تاریخ را وارد کنید",
        "timer" => "تایمر مطالعه",
        "select_task" => "یک وظیفه انتخاب کنید",
        "select_task_first" => "ابتدا یک وظیفه انتخاب کنید",
        "enter_duration" => "مدت زمان معتبر وارد کنید",
        "duration_minutes" => "مدت (دقیقه)",
        "start_timer" => "شروع",
        "stop_timer" => "توقف",
        "timer_completed" => "زمان تمام شد! جلسه ثبت شد",
        "timer_save_failed" => "خطا در ذخیره زمان",
        "total_time" => "مجموع زمان",
        "hours" => "ساعت",
        "minutes" => "دقیقه",
        "language" => "زبان",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_key_itself() {
        for lang in [Lang::En, Lang::Fa] {
            assert_eq!(lookup(lang, "nonexistent_key"), "nonexistent_key");
        }
    }

    #[test]
    fn known_key_resolves_per_language() {
        assert_eq!(lookup(Lang::En, "delete"), "Delete");
        assert_eq!(lookup(Lang::Fa, "delete"), "حذف");
    }

    #[test]
    fn parse_defaults_to_english() {
        assert_eq!(Lang::parse("fa"), Lang::Fa);
        assert_eq!(Lang::parse("en"), Lang::En);
        assert_eq!(Lang::parse("de"), Lang::En);
    }

    #[test]
    fn only_persian_is_rtl() {
        assert!(Lang::Fa.is_rtl());
        assert!(!Lang::En.is_rtl());
    }
}
