//! Demo data definitions.

use coursevault_core::Role;

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "pass123";

pub struct DemoUser {
    pub username: &'static str,
    pub role: Role,
}

pub const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        username: "student1",
        role: Role::Student,
    },
    DemoUser {
        username: "teacher1",
        role: Role::Teacher,
    },
];

pub struct DemoCourse {
    pub name: &'static str,
    pub description: &'static str,
}

/// Demo courses, in insertion order.
pub const DEMO_COURSES: [DemoCourse; 5] = [
    DemoCourse {
        name: "Matemática Básica",
        description: "Curso de introdução a cálculo e álgebra.",
    },
    DemoCourse {
        name: "Programação Web",
        description: "Fundamentos de HTML, CSS e JavaScript.",
    },
    DemoCourse {
        name: "Segurança da Informação",
        description: "Criptografia, hashes e segurança.",
    },
    DemoCourse {
        name: "Banco de Dados",
        description: "Modelagem relacional e SQL.",
    },
    DemoCourse {
        name: "Redes de Computadores",
        description: "TCP/IP, DNS, protocolos e infraestrutura.",
    },
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users_created: usize,
    pub courses_created: usize,
}

impl SeedSummary {
    pub fn is_empty(&self) -> bool {
        self.users_created == 0 && self.courses_created == 0
    }
}
