//! Sample data
//!
//! Five records for each master collection, employee and leave
//! application, plus three manual entries and three attendance records.
//! Persisted collections replace these on open.

use super::Store;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use shared::models::{
    Attendance, AttendanceStatus, Category, Company, DayDuration, Department, Designation,
    Employee, Gender, Holiday, LeaveApplication, LeaveStatus, LeaveType, ManualEntry,
    PersonalDetails, Shift,
};

impl Store {
    pub(super) fn seed_sample_data(&mut self) {
        self.companies.replace(companies());
        self.departments.replace(departments());
        self.categories.replace(categories());
        self.designations.replace(designations());
        self.shifts.replace(shifts());
        self.holidays.replace(holidays());
        self.leave_types.replace(leave_types());
        self.employees.replace(employees());
        self.leave_applications.replace(leave_applications());
        self.manual_entries.replace(manual_entries());
        self.attendances.replace(attendances());
        tracing::debug!("Sample data seeded");
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn companies() -> Vec<Company> {
    [
        (1, "ABC123", "ABC Corporation", "contact@abc.com", "123-456-7890", "123 Main St"),
        (2, "XYZ456", "XYZ Industries", "info@xyz.com", "987-654-3210", "456 Business Ave"),
        (3, "LMN789", "LMN Solutions", "support@lmn.com", "555-123-4567", "789 Tech Park"),
        (4, "PQR321", "PQR Technologies", "hello@pqr.com", "222-333-4444", "321 Innovation St"),
        (5, "EFG654", "EFG Enterprises", "sales@efg.com", "777-888-9999", "654 Corporate Blvd"),
    ]
    .into_iter()
    .map(|(id, code, name, email, phone, street)| Company {
        id,
        code: code.into(),
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        address: format!("{street}, City, Country"),
        gst_no: None,
        pan: None,
        website: None,
        logo: None,
    })
    .collect()
}

fn departments() -> Vec<Department> {
    [
        (1, "IT", "Information Technology", "IT department"),
        (2, "HR", "Human Resources", "HR department"),
        (3, "FIN", "Finance", "Finance department"),
        (4, "MKT", "Marketing", "Marketing department"),
        (5, "OPS", "Operations", "Operations department"),
    ]
    .into_iter()
    .map(|(id, code, name, description)| Department {
        id,
        code: code.into(),
        name: name.into(),
        company_id: 1,
        description: Some(description.into()),
    })
    .collect()
}

fn categories() -> Vec<Category> {
    [
        (1, "PERM", "Permanent", "Permanent employees"),
        (2, "CONT", "Contract", "Contract employees"),
        (3, "INTR", "Intern", "Interns"),
        (4, "TEMP", "Temporary", "Temporary employees"),
        (5, "CONS", "Consultant", "Consultants"),
    ]
    .into_iter()
    .map(|(id, code, name, description)| Category {
        id,
        code: code.into(),
        name: name.into(),
        description: Some(description.into()),
    })
    .collect()
}

fn designations() -> Vec<Designation> {
    [
        (1, "DEV", "Developer", 1, "Software Developer"),
        (2, "MGR", "Manager", 2, "Department Manager"),
        (3, "DIR", "Director", 3, "Department Director"),
        (4, "ANLST", "Analyst", 1, "Business Analyst"),
        (5, "DSGN", "Designer", 4, "UI/UX Designer"),
    ]
    .into_iter()
    .map(|(id, code, name, department_id, description)| Designation {
        id,
        code: code.into(),
        name: name.into(),
        department_id,
        description: Some(description.into()),
    })
    .collect()
}

fn shifts() -> Vec<Shift> {
    [
        (1, "MORN", "Morning Shift", "06:00", "14:00", 15),
        (2, "DAY", "Day Shift", "09:00", "17:00", 15),
        (3, "EVE", "Evening Shift", "14:00", "22:00", 15),
        (4, "NIGHT", "Night Shift", "22:00", "06:00", 15),
        (5, "FLEX", "Flexible Shift", "08:00", "18:00", 30),
    ]
    .into_iter()
    .map(|(id, code, name, start_time, end_time, grace)| Shift {
        id,
        code: code.into(),
        name: name.into(),
        start_time: start_time.into(),
        end_time: end_time.into(),
        grace_period: Some(grace),
        working_hours: 8.0,
        is_active: true,
    })
    .collect()
}

fn holidays() -> Vec<Holiday> {
    [
        (1, day(2023, 1, 1), "New Year's Day", "New Year's Day celebration"),
        (2, day(2023, 5, 1), "Labor Day", "International Workers' Day"),
        (3, day(2023, 8, 15), "Independence Day", "National Independence Day"),
        (4, day(2023, 10, 2), "Gandhi Jayanti", "Birth anniversary of Mahatma Gandhi"),
        (5, day(2023, 12, 25), "Christmas", "Christmas Day celebration"),
    ]
    .into_iter()
    .map(|(id, date, name, description)| Holiday {
        id,
        date,
        name: name.into(),
        description: Some(description.into()),
        is_optional: false,
    })
    .collect()
}

fn leave_types() -> Vec<LeaveType> {
    [
        (1, "CL", "Casual Leave", "For personal matters and emergencies", 12, None),
        (2, "SL", "Sick Leave", "For health issues and medical treatment", 12, None),
        (3, "AL", "Annual Leave", "Yearly vacation leave", 20, Some(5)),
        (4, "ML", "Maternity Leave", "For female employees during childbirth", 180, None),
        (5, "PL", "Paternity Leave", "For male employees during childbirth", 15, None),
    ]
    .into_iter()
    .map(
        |(id, code, name, description, allowed_days, max_carry_forward_days)| LeaveType {
            id,
            code: code.into(),
            name: name.into(),
            description: Some(description.into()),
            allowed_days,
            carry_forward: max_carry_forward_days.is_some(),
            max_carry_forward_days,
        },
    )
    .collect()
}

fn employees() -> Vec<Employee> {
    [
        (1, "John Smith", day(2020, 1, 15), Gender::Male, 1, 1, 2, true, "9876543210"),
        (2, "Sarah Johnson", day(2019, 5, 20), Gender::Female, 2, 2, 2, false, "8765432109"),
        (3, "Mike Thompson", day(2021, 3, 10), Gender::Male, 3, 3, 2, false, "7654321098"),
        (4, "Emily Davis", day(2022, 1, 5), Gender::Female, 4, 5, 2, true, "6543210987"),
        (5, "Robert Wilson", day(2020, 11, 15), Gender::Male, 1, 1, 4, true, "5432109876"),
    ]
    .into_iter()
    .map(
        |(id, name, hire_date, gender, department_id, designation_id, shift_id, ot, mobile)| {
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            Employee {
                id,
                machine_code: format!("M{id:03}"),
                employee_code: format!("EMP{id:03}"),
                name: name.into(),
                hire_date,
                gender,
                department_id,
                category_id: 1,
                designation_id,
                shift_id,
                ot_eligible: ot,
                auto_shift: false,
                resigned: false,
                personal: PersonalDetails {
                    email: Some(email),
                    mobile: Some(mobile.into()),
                    ..Default::default()
                },
            }
        },
    )
    .collect()
}

fn leave_applications() -> Vec<LeaveApplication> {
    [
        (
            1,
            1,
            1,
            day(2023, 10, 15),
            day(2023, 10, 17),
            "Personal work",
            LeaveStatus::Approved,
            day(2023, 10, 1),
        ),
        (
            2,
            2,
            2,
            day(2023, 11, 5),
            day(2023, 11, 7),
            "Not feeling well",
            LeaveStatus::Pending,
            day(2023, 10, 25),
        ),
        (
            3,
            3,
            3,
            day(2023, 12, 20),
            day(2023, 12, 31),
            "Year-end vacation",
            LeaveStatus::Approved,
            day(2023, 11, 15),
        ),
        (
            4,
            4,
            1,
            day(2024, 1, 2),
            day(2024, 1, 3),
            "Family function",
            LeaveStatus::Rejected,
            day(2023, 12, 20),
        ),
        (
            5,
            5,
            2,
            day(2024, 2, 10),
            day(2024, 2, 12),
            "Medical checkup",
            LeaveStatus::Pending,
            day(2024, 1, 25),
        ),
    ]
    .into_iter()
    .map(
        |(id, employee_id, leave_type_id, start_date, end_date, remarks, status, applied)| {
            LeaveApplication {
                id,
                employee_id,
                leave_type_id,
                start_date,
                end_date,
                day_duration: DayDuration::Full,
                remarks: Some(remarks.into()),
                status,
                applied_on: midnight(applied),
            }
        },
    )
    .collect()
}

fn manual_entries() -> Vec<ManualEntry> {
    [
        (1, 1, day(2023, 10, 10), "09:15", "18:00", "Forgot to punch in"),
        (2, 2, day(2023, 10, 12), "09:00", "17:30", "System issue"),
        (3, 3, day(2023, 10, 15), "09:30", "18:30", "Biometric not working"),
    ]
    .into_iter()
    .map(|(id, employee_id, date, in_time, out_time, remarks)| ManualEntry {
        id,
        employee_id,
        date,
        in_time: Some(in_time.into()),
        out_time: Some(out_time.into()),
        remarks: Some(remarks.into()),
    })
    .collect()
}

fn attendances() -> Vec<Attendance> {
    [
        (1, 1, "09:00", "18:00", 0, 0, 1.0),
        (2, 2, "09:15", "17:45", 15, 15, 0.0),
        (3, 3, "09:30", "18:30", 30, 0, 0.5),
    ]
    .into_iter()
    .map(
        |(id, employee_id, in_time, out_time, late, early, overtime)| Attendance {
            id,
            employee_id,
            date: day(2023, 10, 1),
            in_time: in_time.into(),
            out_time: Some(out_time.into()),
            status: AttendanceStatus::Present,
            late_minutes: Some(late),
            early_departure_minutes: Some(early),
            overtime_hours: Some(overtime),
        },
    )
    .collect()
}
