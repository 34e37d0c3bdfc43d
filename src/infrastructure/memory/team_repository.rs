//! In-Memory Team Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};

use crate::application::ports::{
    Page, PageRequest, PlayerRecord, RepositoryError, TeamRecord, TeamRepositoryPort,
    TeamSortField,
};
use crate::domain::team::NewTeam;
use crate::domain::SortDirection;

/// 内存球队仓储
///
/// ID 由原子计数器分配，单调递增且不复用
pub struct InMemoryTeamRepository {
    teams: DashMap<i64, TeamRecord>,
    next_team_id: AtomicI64,
    next_player_id: AtomicI64,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self {
            teams: DashMap::new(),
            next_team_id: AtomicI64::new(1),
            next_player_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_by(field: TeamSortField, a: &TeamRecord, b: &TeamRecord) -> Ordering {
    match field {
        TeamSortField::Id => a.id.cmp(&b.id),
        TeamSortField::Name => a.name.cmp(&b.name),
        TeamSortField::Acronym => a.acronym.cmp(&b.acronym),
        TeamSortField::Budget => a.budget.cmp(&b.budget),
    }
}

#[async_trait]
impl TeamRepositoryPort for InMemoryTeamRepository {
    async fn create(&self, team: &NewTeam) -> Result<TeamRecord, RepositoryError> {
        let id = self.next_team_id.fetch_add(1, AtomicOrdering::SeqCst);

        let players = team
            .players
            .iter()
            .map(|p| PlayerRecord {
                id: self.next_player_id.fetch_add(1, AtomicOrdering::SeqCst),
                name: p.name.clone(),
                position: p.position,
            })
            .collect();

        let record = TeamRecord {
            id,
            name: team.name.clone(),
            acronym: team.acronym.clone(),
            budget: team.budget,
            players,
        };

        self.teams.insert(id, record.clone());
        tracing::debug!(team_id = id, "Team stored in memory");

        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TeamRecord>, RepositoryError> {
        Ok(self.teams.get(&id).map(|t| t.clone()))
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<TeamRecord>, RepositoryError> {
        let offset = request.offset()?;

        // 先解析所有排序字段，未知字段直接拒绝
        let keys = request
            .sort
            .orders()
            .iter()
            .map(|o| TeamSortField::resolve(&o.field).map(|f| (f, o.direction)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut teams: Vec<TeamRecord> = self.teams.iter().map(|t| t.value().clone()).collect();
        teams.sort_by_key(|t| t.id);

        // 稳定排序：所有键相等时保持 id 升序
        teams.sort_by(|a, b| {
            keys.iter()
                .map(|(field, direction)| {
                    let ord = compare_by(*field, a, b);
                    match direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        let total = teams.len() as u64;
        let content = teams.into_iter().skip(offset).take(request.size).collect();

        Ok(Page::new(content, request, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{NewPlayer, Position};
    use crate::domain::{parse_sort, Sort};

    fn new_team(name: &str, budget: i64) -> NewTeam {
        NewTeam {
            name: name.to_string(),
            acronym: name.to_uppercase(),
            budget,
            players: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = InMemoryTeamRepository::new();
        let mut team = new_team("a", 1);
        team.players = vec![
            NewPlayer {
                name: "p1".to_string(),
                position: Position::ST,
            },
            NewPlayer {
                name: "p2".to_string(),
                position: Position::CF,
            },
        ];

        let first = repo.create(&team).await.unwrap();
        let second = repo.create(&team).await.unwrap();

        assert!(second.id > first.id);
        let player_ids: Vec<i64> = first
            .players
            .iter()
            .chain(second.players.iter())
            .map(|p| p.id)
            .collect();
        assert_eq!(player_ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = InMemoryTeamRepository::new();
        assert!(repo.find_by_id(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_pagination_windows() {
        let repo = InMemoryTeamRepository::new();
        for name in ["a", "b", "c", "d", "e"] {
            repo.create(&new_team(name, 1)).await.unwrap();
        }

        let first = repo
            .find_page(&PageRequest::new(0, 2, Sort::unsorted()))
            .await
            .unwrap();
        assert_eq!(first.content.len(), 2);
        assert_eq!(first.total_elements, 5);
        assert!(first.is_first());
        assert!(!first.is_last());

        let last = repo
            .find_page(&PageRequest::new(2, 2, Sort::unsorted()))
            .await
            .unwrap();
        assert_eq!(last.content.len(), 1);
        assert_eq!(last.content[0].name, "e");
        assert!(last.is_last());

        let beyond = repo
            .find_page(&PageRequest::new(9, 2, Sort::unsorted()))
            .await
            .unwrap();
        assert!(beyond.content.is_empty());
        assert_eq!(beyond.total_elements, 5);
    }

    #[tokio::test]
    async fn test_sort_by_budget_then_name() {
        let repo = InMemoryTeamRepository::new();
        repo.create(&new_team("b", 10)).await.unwrap();
        repo.create(&new_team("a", 10)).await.unwrap();
        repo.create(&new_team("c", 5)).await.unwrap();

        let sort = parse_sort("budget:-1,name:1").unwrap();
        let page = repo
            .find_page(&PageRequest::new(0, 20, sort))
            .await
            .unwrap();
        let names: Vec<&str> = page.content.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_unknown_sort_field() {
        let repo = InMemoryTeamRepository::new();
        let sort = parse_sort("color:1").unwrap();
        let result = repo.find_page(&PageRequest::new(0, 20, sort)).await;
        assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
    }

    #[tokio::test]
    async fn test_zero_page_size_is_rejected() {
        let repo = InMemoryTeamRepository::new();
        let result = repo
            .find_page(&PageRequest::new(0, 0, Sort::unsorted()))
            .await;
        assert!(matches!(result, Err(RepositoryError::InvalidQuery(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_assign_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let repo = Arc::new(InMemoryTeamRepository::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    let mut team = new_team(&format!("team-{i}"), i + 1);
                    team.players = vec![
                        NewPlayer {
                            name: format!("keeper-{i}"),
                            position: Position::GK,
                        },
                        NewPlayer {
                            name: format!("striker-{i}"),
                            position: Position::ST,
                        },
                    ];
                    repo.create(&team).await
                })
            })
            .collect();

        let mut team_ids = HashSet::new();
        let mut player_ids = HashSet::new();
        for task in tasks {
            let saved = task.await.unwrap().unwrap();
            team_ids.insert(saved.id);
            player_ids.extend(saved.players.iter().map(|p| p.id));
        }
        assert_eq!(team_ids.len(), 64);
        assert_eq!(player_ids.len(), 128);
        assert_eq!(repo.len(), 64);

        let page = repo
            .find_page(&PageRequest::new(0, 100, Sort::unsorted()))
            .await
            .unwrap();
        assert_eq!(page.total_elements, 64);
    }
}
