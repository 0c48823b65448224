use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::account_dto::{
    CreateAdminPayload, CreateStudentPayload, CreateTeacherPayload, CreateUserPayload,
    UpdateStudentPayload,
};
use crate::error::{Error, Result};
use crate::models::admin::Admin;
use crate::models::student::Student;
use crate::models::teacher::Teacher;
use crate::models::user::{Role, User};
use crate::repository::Repository;

#[derive(Clone)]
pub struct AccountService {
    students: Arc<dyn Repository<Student>>,
    teachers: Arc<dyn Repository<Teacher>>,
    admins: Arc<dyn Repository<Admin>>,
}

impl AccountService {
    pub fn new(
        students: Arc<dyn Repository<Student>>,
        teachers: Arc<dyn Repository<Teacher>>,
        admins: Arc<dyn Repository<Admin>>,
    ) -> Self {
        Self {
            students,
            teachers,
            admins,
        }
    }

    pub fn create_student(&self, payload: CreateStudentPayload) -> Result<Student> {
        payload.validate()?;
        self.ensure_email_available(&payload.user.email, None)?;

        let student = Student {
            id: Uuid::new_v4(),
            user: build_user(payload.user, Role::Student),
            phone_number: payload.phone_number,
            address: payload.address,
            faculty: payload.faculty,
            group: payload.group,
            collocation_level: None,
            comprehension_level: None,
            writing_level: None,
            listening_level: None,
            speaking_level: None,
        };

        info!(student_id = %student.id, "student created");
        Ok(self.students.upsert(student))
    }

    pub fn update_student(&self, student_id: Uuid, payload: UpdateStudentPayload) -> Result<Student> {
        payload.validate()?;

        let mut student = self.get_student_by_id(student_id)?;
        if let Some(email) = payload.email {
            if !email.eq_ignore_ascii_case(&student.user.email) {
                self.ensure_email_available(&email, Some(student.user.id))?;
            }
            student.user.email = email;
        }
        if let Some(first_name) = payload.first_name {
            student.user.first_name = first_name;
        }
        if let Some(last_name) = payload.last_name {
            student.user.last_name = last_name;
        }
        if let Some(phone_number) = payload.phone_number {
            student.phone_number = Some(phone_number);
        }
        if let Some(address) = payload.address {
            student.address = Some(address);
        }
        if let Some(faculty) = payload.faculty {
            student.faculty = Some(faculty);
        }
        if let Some(group) = payload.group {
            student.group = Some(group);
        }
        if let Some(is_active) = payload.is_active {
            student.user.is_active = is_active;
        }
        student.user.updated_at = Utc::now();

        Ok(self.students.upsert(student))
    }

    pub fn get_student_by_id(&self, student_id: Uuid) -> Result<Student> {
        self.students
            .get(student_id)
            .ok_or_else(|| Error::NotFound(format!("Student {} not found", student_id)))
    }

    pub fn list_students(&self) -> Vec<Student> {
        let mut students = self.students.list();
        students.sort_by(|a, b| {
            (&a.user.last_name, &a.user.first_name).cmp(&(&b.user.last_name, &b.user.first_name))
        });
        students
    }

    pub fn delete_student(&self, student_id: Uuid) -> Result<bool> {
        let deleted = self.students.delete(student_id);
        if deleted {
            info!(student_id = %student_id, "student deleted");
        }
        Ok(deleted)
    }

    pub fn create_teacher(&self, payload: CreateTeacherPayload) -> Result<Teacher> {
        payload.validate()?;
        self.ensure_email_available(&payload.user.email, None)?;

        let teacher = Teacher {
            id: Uuid::new_v4(),
            user: build_user(payload.user, Role::Teacher),
            department: payload.department,
        };

        info!(teacher_id = %teacher.id, "teacher created");
        Ok(self.teachers.upsert(teacher))
    }

    pub fn get_teacher_by_id(&self, teacher_id: Uuid) -> Result<Teacher> {
        self.teachers
            .get(teacher_id)
            .ok_or_else(|| Error::NotFound(format!("Teacher {} not found", teacher_id)))
    }

    pub fn list_teachers(&self) -> Vec<Teacher> {
        let mut teachers = self.teachers.list();
        teachers.sort_by(|a, b| {
            (&a.user.last_name, &a.user.first_name).cmp(&(&b.user.last_name, &b.user.first_name))
        });
        teachers
    }

    pub fn delete_teacher(&self, teacher_id: Uuid) -> Result<bool> {
        Ok(self.teachers.delete(teacher_id))
    }

    pub fn create_admin(&self, payload: CreateAdminPayload) -> Result<Admin> {
        payload.validate()?;
        self.ensure_email_available(&payload.user.email, None)?;

        let admin = Admin {
            id: Uuid::new_v4(),
            user: build_user(payload.user, Role::Admin),
        };

        info!(admin_id = %admin.id, "admin created");
        Ok(self.admins.upsert(admin))
    }

    pub fn list_admins(&self) -> Vec<Admin> {
        let mut admins = self.admins.list();
        admins.sort_by(|a, b| {
            (&a.user.last_name, &a.user.first_name).cmp(&(&b.user.last_name, &b.user.first_name))
        });
        admins
    }

    pub fn delete_admin(&self, admin_id: Uuid) -> Result<bool> {
        Ok(self.admins.delete(admin_id))
    }

    fn ensure_email_available(&self, email: &str, exclude_user: Option<Uuid>) -> Result<()> {
        let taken = self
            .students
            .list()
            .into_iter()
            .map(|s| s.user)
            .chain(self.teachers.list().into_iter().map(|t| t.user))
            .chain(self.admins.list().into_iter().map(|a| a.user))
            .filter(|u| Some(u.id) != exclude_user)
            .any(|u| u.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(Error::BadRequest(format!(
                "Email {} is already registered",
                email
            )));
        }
        Ok(())
    }
}

fn build_user(payload: CreateUserPayload, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        official_id: payload.official_id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        role,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
