use clap::Subcommand;
use jobboard_config::Config;
use jobboard_core_notification_contracts::NotificationFeatureService;
use jobboard_models::notification::EmployeeNotification;
use uuid::Uuid;

use super::{output, provide, public_error, validated};
use crate::environment::types::NotificationFeature;

#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// Send a notification to a single account
    Send {
        sender: Uuid,
        recipient: Uuid,
        text: String,
    },
    /// Send a notification to every employee of a company
    #[command(aliases(["b"]))]
    Broadcast {
        sender: Uuid,
        company: Uuid,
        text: String,
    },
    /// List the broadcasts of the employee's company
    #[command(aliases(["ls", "l"]))]
    List { employee: Uuid },
    /// Mark a broadcast as read for the employee
    MarkRead { employee: Uuid, notification: Uuid },
    /// Mark every broadcast of the employee's company as read
    MarkAllRead { employee: Uuid },
    /// Count the broadcasts the employee has not read yet
    #[command(aliases(["count", "c"]))]
    UnreadCount { employee: Uuid },
    /// List the notifications sent to an account
    #[command(aliases(["i"]))]
    Inbox { account: Uuid },
    /// Mark a notification sent to an account as read
    Read { account: Uuid, notification: Uuid },
}

impl NotificationCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let notification: NotificationFeature = provide(&config).await?;
        match self {
            Self::Send {
                sender,
                recipient,
                text,
            } => {
                let text = validated(text, "invalid_text")?;
                let sent = notification
                    .send_individual(recipient.into(), sender.into(), text)
                    .await
                    .map_err(public_error)?;
                println!("Notification {} sent", sent.id);
            }
            Self::Broadcast {
                sender,
                company,
                text,
            } => {
                let text = validated(text, "invalid_text")?;
                let sent = notification
                    .broadcast(company.into(), sender.into(), text)
                    .await
                    .map_err(public_error)?;
                println!("Notification {} broadcast", sent.id);
            }
            Self::List { employee } => {
                for line in list(&notification, employee).await? {
                    println!("{line}");
                }
            }
            Self::MarkRead {
                employee,
                notification: notification_id,
            } => {
                notification
                    .mark_read(employee.into(), notification_id.into())
                    .await
                    .map_err(public_error)?;
            }
            Self::MarkAllRead { employee } => {
                notification
                    .mark_all_read(employee.into())
                    .await
                    .map_err(public_error)?;
            }
            Self::UnreadCount { employee } => {
                println!("{}", unread_count(&notification, employee).await?);
            }
            Self::Inbox { account } => {
                let inbox = notification
                    .list_individual(account.into())
                    .await
                    .map_err(public_error)?;
                if inbox.is_empty() {
                    println!("No notifications.");
                }
                for item in inbox {
                    let state = if item.read { "read" } else { "new" };
                    println!(
                        "{}  [{state}]  {}  from {}: {}",
                        item.id,
                        output::date(item.created_at),
                        item.sender_id,
                        item.text
                    );
                }
            }
            Self::Read {
                account,
                notification: notification_id,
            } => {
                notification
                    .mark_individual_read(account.into(), notification_id.into())
                    .await
                    .map_err(public_error)?;
            }
        }

        Ok(())
    }
}

async fn list(
    notification: &impl NotificationFeatureService,
    employee: Uuid,
) -> anyhow::Result<Vec<String>> {
    let notifications = notification
        .list_for_employee(employee.into())
        .await
        .map_err(public_error)?;
    if notifications.is_empty() {
        return Ok(vec!["No notifications.".into()]);
    }

    Ok(notifications.iter().map(list_line).collect())
}

fn list_line(item: &EmployeeNotification) -> String {
    let state = if item.is_read { "read" } else { "new" };
    let notification = &item.notification;
    format!(
        "{}  [{state}]  {}  from {}: {}",
        notification.id,
        output::date(notification.created_at),
        notification.sender_id,
        notification.text
    )
}

async fn unread_count(
    notification: &impl NotificationFeatureService,
    employee: Uuid,
) -> anyhow::Result<u64> {
    notification
        .unread_count(employee.into())
        .await
        .map_err(public_error)
}
