//! SQLite Team Repository

use async_trait::async_trait;
use sqlx::FromRow;
use std::collections::HashMap;

use super::DbPool;
use crate::application::ports::{
    Page, PageRequest, PlayerRecord, RepositoryError, TeamRecord, TeamRepositoryPort,
    TeamSortField,
};
use crate::domain::team::{NewTeam, Position};

/// SQLite Team Repository
pub struct SqliteTeamRepository {
    pool: DbPool,
}

impl SqliteTeamRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 批量加载多支球队的名单，按 roster_index 排序
    async fn load_players(
        &self,
        team_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<PlayerRecord>>, RepositoryError> {
        let mut rosters: HashMap<i64, Vec<PlayerRecord>> = HashMap::new();
        if team_ids.is_empty() {
            return Ok(rosters);
        }

        let placeholders: Vec<&str> = team_ids.iter().map(|_| "?").collect();
        let query = format!(
            "SELECT id, team_id, name, position FROM players WHERE team_id IN ({}) ORDER BY team_id, roster_index",
            placeholders.join(", ")
        );

        let mut sql_query = sqlx::query_as::<_, PlayerRow>(&query);
        for id in team_ids {
            sql_query = sql_query.bind(*id);
        }

        let rows: Vec<PlayerRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        for row in rows {
            let team_id = row.team_id;
            rosters
                .entry(team_id)
                .or_default()
                .push(PlayerRecord::try_from(row)?);
        }

        Ok(rosters)
    }
}

#[derive(FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    acronym: String,
    budget: i64,
}

impl TeamRow {
    fn into_record(self, players: Vec<PlayerRecord>) -> TeamRecord {
        TeamRecord {
            id: self.id,
            name: self.name,
            acronym: self.acronym,
            budget: self.budget,
            players,
        }
    }
}

#[derive(FromRow)]
struct PlayerRow {
    id: i64,
    team_id: i64,
    name: String,
    position: String,
}

impl TryFrom<PlayerRow> for PlayerRecord {
    type Error = RepositoryError;

    fn try_from(row: PlayerRow) -> Result<Self, Self::Error> {
        Ok(PlayerRecord {
            id: row.id,
            name: row.name,
            position: Position::from_str(&row.position).ok_or_else(|| {
                RepositoryError::SerializationError(format!(
                    "Unknown position '{}' for player {}",
                    row.position, row.id
                ))
            })?,
        })
    }
}

/// 构建 ORDER BY 子句，列名只来自白名单；最后追加 id 保证顺序确定
fn order_by_clause(request: &PageRequest) -> Result<String, RepositoryError> {
    let mut parts = Vec::with_capacity(request.sort.orders().len() + 1);
    for order in request.sort.orders() {
        let field = TeamSortField::resolve(&order.field)?;
        parts.push(format!("{} {}", field.column(), order.direction.as_sql()));
    }
    parts.push("id ASC".to_string());
    Ok(parts.join(", "))
}

#[async_trait]
impl TeamRepositoryPort for SqliteTeamRepository {
    async fn create(&self, team: &NewTeam) -> Result<TeamRecord, RepositoryError> {
        // 球队和名单在同一事务中写入
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let team_id = sqlx::query("INSERT INTO teams (name, acronym, budget) VALUES (?, ?, ?)")
            .bind(&team.name)
            .bind(&team.acronym)
            .bind(team.budget)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
            .last_insert_rowid();

        let mut players = Vec::with_capacity(team.players.len());
        for (index, player) in team.players.iter().enumerate() {
            let player_id = sqlx::query(
                "INSERT INTO players (team_id, roster_index, name, position) VALUES (?, ?, ?, ?)",
            )
            .bind(team_id)
            .bind(index as i64)
            .bind(&player.name)
            .bind(player.position.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?
            .last_insert_rowid();

            players.push(PlayerRecord {
                id: player_id,
                name: player.name.clone(),
                position: player.position,
            });
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(TeamRecord {
            id: team_id,
            name: team.name.clone(),
            acronym: team.acronym.clone(),
            budget: team.budget,
            players,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TeamRecord>, RepositoryError> {
        let row: Option<TeamRow> =
            sqlx::query_as("SELECT id, name, acronym, budget FROM teams WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut rosters = self.load_players(&[row.id]).await?;
        let players = rosters.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_record(players)))
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<TeamRecord>, RepositoryError> {
        let offset = request.offset()?;
        let order_by = order_by_clause(request)?;

        let limit = i64::try_from(request.size).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).map_err(|_| {
            RepositoryError::InvalidQuery(format!("Offset {} is out of range", offset))
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let query = format!(
            "SELECT id, name, acronym, budget FROM teams ORDER BY {} LIMIT ? OFFSET ?",
            order_by
        );
        let rows: Vec<TeamRow> = sqlx::query_as(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let team_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut rosters = self.load_players(&team_ids).await?;

        let content = rows
            .into_iter()
            .map(|row| {
                let players = rosters.remove(&row.id).unwrap_or_default();
                row.into_record(players)
            })
            .collect();

        Ok(Page::new(content, request, total.max(0) as u64))
    }
}
