//! In-memory stores and fixtures for unit tests. Each store keeps its rows in
//! insertion order and can be told to fail a specific upcoming call.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::{hash_password, Identity, Principal};
use crate::database::models::{
    Answer, Form, FormUpdate, NewAnswer, NewForm, NewPoolAnswer, NewQuestion, NewUser, PoolAnswer,
    Question, QuestionUpdate, User,
};
use crate::database::{AnswerStore, FormStore, PoolAnswerStore, QuestionStore, Stores, UserStore};
use crate::types::{DomainError, DomainResult, Pagination, RecordId};

pub const TEST_PASSWORD: &str = "password";

pub fn identity_of(user: &User) -> Identity {
    Identity::of(Principal::new(user.id, user.login.clone()))
}

/// Fails the n-th upcoming call (1 = the next one), once
#[derive(Default)]
pub struct Fault {
    armed: Mutex<Option<(usize, DomainError)>>,
}

impl Fault {
    pub fn arm(&self, nth: usize, err: DomainError) {
        assert!(nth >= 1, "calls are counted from 1");
        *self.armed.lock().unwrap() = Some((nth, err));
    }

    fn check(&self) -> DomainResult<()> {
        let mut armed = self.armed.lock().unwrap();
        match armed.take() {
            Some((1, err)) => Err(err),
            Some((n, err)) => {
                *armed = Some((n - 1, err));
                Ok(())
            }
            None => Ok(()),
        }
    }
}

struct Table<T> {
    next_id: RecordId,
    rows: BTreeMap<RecordId, T>,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    fn insert(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: RecordId) -> DomainResult<T> {
        self.rows.get(&id).cloned().ok_or(DomainError::ContentNotFound)
    }

    fn remove(&mut self, id: RecordId) -> DomainResult<()> {
        self.rows.remove(&id).map(|_| ()).ok_or(DomainError::ContentNotFound)
    }

    fn page(&self, page: Pagination, keep: impl Fn(&T) -> bool) -> Vec<T> {
        page.window(self.rows.values().filter(|row| keep(row)).cloned())
    }
}

pub struct MemoryUserStore {
    table: Mutex<Table<User>>,
}

impl MemoryUserStore {
    pub fn get_by_login_sync(&self, login: &str) -> Option<User> {
        let table = self.table.lock().unwrap();
        table.rows.values().find(|u| u.login == login).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> DomainResult<User> {
        let mut table = self.table.lock().unwrap();
        if table.rows.values().any(|u| u.login == user.login) {
            return Err(DomainError::Conflict);
        }
        Ok(table.insert(|id| User {
            id,
            login: user.login,
            password_hash: user.password_hash,
        }))
    }

    async fn get_by_login(&self, login: &str) -> DomainResult<User> {
        self.get_by_login_sync(login).ok_or(DomainError::ContentNotFound)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<User> {
        self.table.lock().unwrap().get(id)
    }
}

pub struct MemoryFormStore {
    table: Mutex<Table<Form>>,
    get_fault: Fault,
}

impl MemoryFormStore {
    pub fn fail_next_get(&self, err: DomainError) {
        self.get_fault.arm(1, err);
    }
}

#[async_trait]
impl FormStore for MemoryFormStore {
    async fn create(&self, form: NewForm) -> DomainResult<Form> {
        Ok(self.table.lock().unwrap().insert(|id| Form {
            id,
            user_id: form.user_id,
            title: form.title,
            description: form.description,
        }))
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Form> {
        self.get_fault.check()?;
        self.table.lock().unwrap().get(id)
    }

    async fn get_by_user_id(&self, user_id: RecordId, page: Pagination) -> DomainResult<Vec<Form>> {
        Ok(self.table.lock().unwrap().page(page, |f| f.user_id == user_id))
    }

    async fn update(&self, update: FormUpdate) -> DomainResult<Form> {
        let mut table = self.table.lock().unwrap();
        let form = table.rows.get_mut(&update.id).ok_or(DomainError::ContentNotFound)?;
        update.apply_to(form);
        Ok(form.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.table.lock().unwrap().remove(id)
    }
}

pub struct MemoryQuestionStore {
    table: Mutex<Table<Question>>,
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn create(&self, question: NewQuestion) -> DomainResult<Question> {
        Ok(self.table.lock().unwrap().insert(|id| Question {
            id,
            form_id: question.form_id,
            header: question.header,
        }))
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Question> {
        self.table.lock().unwrap().get(id)
    }

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<Question>> {
        Ok(self.table.lock().unwrap().page(page, |q| q.form_id == form_id))
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question> {
        let mut table = self.table.lock().unwrap();
        let question = table
            .rows
            .get_mut(&update.id)
            .filter(|q| q.form_id == update.form_id)
            .ok_or(DomainError::ContentNotFound)?;
        question.header = update.header;
        Ok(question.clone())
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.table.lock().unwrap().remove(id)
    }
}

pub struct MemoryPoolAnswerStore {
    table: Mutex<Table<PoolAnswer>>,
    create_fault: Fault,
    delete_fault: Fault,
    deleted: Mutex<Vec<RecordId>>,
}

impl MemoryPoolAnswerStore {
    pub fn fail_next_create(&self, err: DomainError) {
        self.create_fault.arm(1, err);
    }

    pub fn fail_next_delete(&self, err: DomainError) {
        self.delete_fault.arm(1, err);
    }

    /// Every id passed to a successful `delete`, in call order
    pub fn deleted_ids(&self) -> Vec<RecordId> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl PoolAnswerStore for MemoryPoolAnswerStore {
    async fn create(&self, pool_answer: NewPoolAnswer) -> DomainResult<PoolAnswer> {
        self.create_fault.check()?;
        Ok(self.table.lock().unwrap().insert(|id| PoolAnswer {
            id,
            user_id: pool_answer.user_id,
            form_id: pool_answer.form_id,
        }))
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<PoolAnswer> {
        self.table.lock().unwrap().get(id)
    }

    async fn get_by_form_id(&self, form_id: RecordId, page: Pagination) -> DomainResult<Vec<PoolAnswer>> {
        Ok(self.table.lock().unwrap().page(page, |p| p.form_id == form_id))
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        self.delete_fault.check()?;
        self.table.lock().unwrap().remove(id)?;
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

pub struct MemoryAnswerStore {
    table: Mutex<Table<Answer>>,
    create_fault: Fault,
}

impl MemoryAnswerStore {
    /// Make the n-th upcoming `create` fail with `err`
    pub fn fail_create_at(&self, nth: usize, err: DomainError) {
        self.create_fault.arm(nth, err);
    }

    pub fn all(&self) -> Vec<Answer> {
        self.table.lock().unwrap().rows.values().cloned().collect()
    }
}

#[async_trait]
impl AnswerStore for MemoryAnswerStore {
    async fn create(&self, answer: NewAnswer) -> DomainResult<Answer> {
        self.create_fault.check()?;
        Ok(self.table.lock().unwrap().insert(|id| Answer {
            id,
            question_id: answer.question_id,
            pool_answer_id: answer.pool_answer_id,
            value: answer.value,
        }))
    }

    async fn get_by_pool_answer_id(&self, pool_answer_id: RecordId, page: Pagination) -> DomainResult<Vec<Answer>> {
        Ok(self.table.lock().unwrap().page(page, |a| a.pool_answer_id == pool_answer_id))
    }
}

/// One set of in-memory stores, shared by everything built from it
#[derive(Clone)]
pub struct MemoryStores {
    pub users: Arc<MemoryUserStore>,
    pub forms: Arc<MemoryFormStore>,
    pub questions: Arc<MemoryQuestionStore>,
    pub pool_answers: Arc<MemoryPoolAnswerStore>,
    pub answers: Arc<MemoryAnswerStore>,
}

impl Default for MemoryStores {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStores {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MemoryUserStore {
                table: Mutex::new(Table::new()),
            }),
            forms: Arc::new(MemoryFormStore {
                table: Mutex::new(Table::new()),
                get_fault: Fault::default(),
            }),
            questions: Arc::new(MemoryQuestionStore {
                table: Mutex::new(Table::new()),
            }),
            pool_answers: Arc::new(MemoryPoolAnswerStore {
                table: Mutex::new(Table::new()),
                create_fault: Fault::default(),
                delete_fault: Fault::default(),
                deleted: Mutex::new(Vec::new()),
            }),
            answers: Arc::new(MemoryAnswerStore {
                table: Mutex::new(Table::new()),
                create_fault: Fault::default(),
            }),
        }
    }

    /// Trait-object view used to build services and the router
    pub fn stores(&self) -> Stores {
        Stores {
            users: self.users.clone(),
            forms: self.forms.clone(),
            questions: self.questions.clone(),
            pool_answers: self.pool_answers.clone(),
            answers: self.answers.clone(),
        }
    }

    /// User whose password is `TEST_PASSWORD`
    pub async fn seed_user(&self, login: &str) -> User {
        self.users
            .create(NewUser {
                login: login.to_string(),
                password_hash: hash_password(TEST_PASSWORD).unwrap(),
            })
            .await
            .unwrap()
    }

    pub async fn seed_form(&self, owner: RecordId, title: &str) -> Form {
        self.forms
            .create(NewForm {
                user_id: owner,
                title: title.to_string(),
                description: format!("{} description", title),
            })
            .await
            .unwrap()
    }

    pub async fn seed_question(&self, form_id: RecordId, header: &str) -> Question {
        self.questions
            .create(NewQuestion {
                form_id,
                header: header.to_string(),
            })
            .await
            .unwrap()
    }
}
